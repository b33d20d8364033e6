//! Authentication use case: login, logout and sensitive-area
//! reauthentication.
//!
//! The password never outlives the call: the dialog clears its field on
//! every exit path and nothing here retains the secret.

use crate::busy;
use crate::portal_usecase::PortalUseCase;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use tokio::time::sleep;
use workon_core::account::UserAccount;
use workon_core::session::Session;
use workon_core::{Result, WorkonError};
use workon_infrastructure::AccountDirectory;

/// Simulated verifier latency for login.
const LOGIN_DELAY: Duration = Duration::from_millis(500);
/// Simulated verifier latency for reauthentication.
const REAUTH_DELAY: Duration = Duration::from_millis(1000);

/// Login, logout and reauthentication against the account directory.
///
/// Password verification is a placeholder (non-empty check) until the real
/// verifier lands; the latency of that verifier is simulated so the UI's
/// busy handling is exercised.
pub struct AuthUseCase {
    directory: Arc<dyn AccountDirectory>,
    portal: Arc<PortalUseCase>,
    login_delay: Duration,
    reauth_delay: Duration,
    in_flight: AtomicBool,
}

impl AuthUseCase {
    /// Creates the use case with production delays.
    pub fn new(directory: Arc<dyn AccountDirectory>, portal: Arc<PortalUseCase>) -> Self {
        Self {
            directory,
            portal,
            login_delay: LOGIN_DELAY,
            reauth_delay: REAUTH_DELAY,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Overrides the simulated delays (tests).
    pub fn with_delays(mut self, login: Duration, reauth: Duration) -> Self {
        self.login_delay = login;
        self.reauth_delay = reauth;
        self
    }

    /// True while a login or reauthentication is in flight; the UI disables
    /// the submit control for the duration.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(std::sync::atomic::Ordering::SeqCst)
    }

    /// Authenticates and opens a fresh session.
    ///
    /// The sensitive-area flag always starts false, whatever the previous
    /// login had granted.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserAccount> {
        let _guard = busy::acquire(&self.in_flight, "login")?;

        if password.is_empty() {
            return Err(WorkonError::security("Senha não pode estar vazia"));
        }

        sleep(self.login_delay).await;

        let account = self
            .directory
            .resolve(email)
            .ok_or_else(|| WorkonError::security("Credenciais inválidas"))?;

        tracing::info!("[Auth] login: {} ({})", account.email, account.role);
        self.portal.open_session(Session::open(account.clone())).await;
        Ok(account)
    }

    /// Destroys the session and resets all transient UI state.
    pub async fn logout(&self) {
        tracing::info!("[Auth] logout");
        self.portal.close_session().await;
    }

    /// Verifies the sensitive-area reauthentication password.
    ///
    /// On success the gate commits the legal view and the session keeps the
    /// grant. On a wrong (empty) password the prompt stays up so the user
    /// retries in place; only cancel or success leaves that state.
    pub async fn reauthenticate(&self, password: &str) -> Result<()> {
        let _guard = busy::acquire(&self.in_flight, "reauthentication")?;

        if !self.portal.is_logged_in().await {
            return Err(WorkonError::security("Usuário não autenticado"));
        }
        if !self.portal.awaiting_reauth().await {
            return Err(WorkonError::security("Nenhuma reautenticação pendente"));
        }

        sleep(self.reauth_delay).await;

        if password.is_empty() {
            self.portal.fail_reauth().await;
            return Err(WorkonError::security("Senha incorreta. Tente novamente."));
        }

        self.portal.confirm_reauth().await
    }
}
