//! Portal facade: the single mutation path into the session and dashboard
//! state.
//!
//! Presentational collaborators read snapshots and issue requests here;
//! nothing else touches the gate, the department selection or the modal
//! store directly.

use std::sync::Arc;
use tokio::sync::RwLock;
use workon_core::dispatch::{DashboardState, DispatchOutcome};
use workon_core::intent::Intent;
use workon_core::modal::ReportContent;
use workon_core::navigation::NavigationOutcome;
use workon_core::session::Session;
use workon_core::view::ViewTarget;
use workon_core::{Result, WorkonError};

struct PortalState {
    session: Option<Session>,
    board: DashboardState,
}

/// Owns the login session and the transient dashboard state.
///
/// The session and the board are constructed at login and torn down at
/// logout; between those two points every mutation goes through the methods
/// below. Single logical flow at a time (UI event loop), so the lock is
/// about interior mutability, not contention.
pub struct PortalUseCase {
    state: RwLock<PortalState>,
}

impl PortalUseCase {
    /// Creates a logged-out portal.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(PortalState {
                session: None,
                board: DashboardState::new(),
            }),
        })
    }

    /// Installs a fresh session and resets the dashboard (login path).
    pub(crate) async fn open_session(&self, session: Session) {
        let mut state = self.state.write().await;
        state.session = Some(session);
        state.board.reset();
    }

    /// Destroys the session and resets the dashboard (logout path).
    pub(crate) async fn close_session(&self) {
        let mut state = self.state.write().await;
        state.session = None;
        state.board.reset();
    }

    /// Confirms a successful reauthentication on the gate.
    pub(crate) async fn confirm_reauth(&self) -> Result<()> {
        let mut state = self.state.write().await;
        let PortalState { session, board } = &mut *state;
        let session = session
            .as_mut()
            .ok_or_else(|| WorkonError::security("Usuário não autenticado"))?;
        board.gate.confirm_reauth(session);
        Ok(())
    }

    /// Records a failed reauthentication attempt (prompt stays up).
    pub(crate) async fn fail_reauth(&self) {
        let mut state = self.state.write().await;
        state.board.gate.fail_reauth();
    }

    /// True while a session is active.
    pub async fn is_logged_in(&self) -> bool {
        self.state.read().await.session.is_some()
    }

    /// Snapshot of the active session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.session.clone()
    }

    /// The committed view, while logged in.
    pub async fn current_view(&self) -> Option<ViewTarget> {
        let state = self.state.read().await;
        state.session.as_ref().map(|_| state.board.gate.current_view())
    }

    /// Selected department ids in insertion order.
    pub async fn departments(&self) -> Vec<String> {
        self.state.read().await.board.departments.ids().to_vec()
    }

    /// Live modal content, if a report modal is open.
    pub async fn modal_content(&self) -> Option<ReportContent> {
        self.state.read().await.board.modal.content().cloned()
    }

    /// True while the reauthentication prompt should be showing.
    pub async fn awaiting_reauth(&self) -> bool {
        self.state.read().await.board.gate.awaiting_reauth()
    }

    /// Requests navigation to a view through the gate.
    pub async fn request_navigate(&self, view: ViewTarget) -> Result<NavigationOutcome> {
        let mut state = self.state.write().await;
        let PortalState { session, board } = &mut *state;
        let session = session
            .as_ref()
            .ok_or_else(|| WorkonError::security("Usuário não autenticado"))?;
        Ok(board.gate.request_navigate(session, view))
    }

    /// Dispatches a classifier intent.
    pub async fn dispatch(&self, intent: &Intent) -> Result<DispatchOutcome> {
        let mut state = self.state.write().await;
        let PortalState { session, board } = &mut *state;
        let session = session
            .as_ref()
            .ok_or_else(|| WorkonError::security("Usuário não autenticado"))?;
        let outcome = board.dispatch(session, intent);
        tracing::debug!("[Portal] dispatched {intent:?} -> {outcome:?}");
        Ok(outcome)
    }

    /// Toggles a department panel on the dashboard.
    pub async fn toggle_department(&self, id: &str) {
        self.state.write().await.board.departments.toggle(id);
    }

    /// Replaces the department selection (settings view).
    pub async fn replace_departments(&self, ids: Vec<String>) {
        self.state.write().await.board.departments.replace(ids);
    }

    /// Closes the report modal.
    pub async fn close_modal(&self) {
        self.state.write().await.board.modal.close();
    }

    /// Dismisses the reauthentication prompt without authenticating.
    pub async fn cancel_reauth(&self) {
        self.state.write().await.board.gate.cancel_reauth();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workon_core::account::{Role, UserAccount};

    fn account(role: Role) -> UserAccount {
        UserAccount::new("user@empresa.com", "Usuário", role)
    }

    #[tokio::test]
    async fn accessors_are_empty_while_logged_out() {
        let portal = PortalUseCase::new();
        assert!(!portal.is_logged_in().await);
        assert!(portal.current_view().await.is_none());
        assert!(portal.session().await.is_none());
    }

    #[tokio::test]
    async fn requests_without_a_session_are_security_errors() {
        let portal = PortalUseCase::new();
        let err = portal
            .request_navigate(ViewTarget::Settings)
            .await
            .unwrap_err();
        assert!(err.is_security());
    }

    #[tokio::test]
    async fn login_resets_the_board_and_logout_tears_it_down() {
        let portal = PortalUseCase::new();
        portal.open_session(Session::open(account(Role::Manager))).await;
        portal
            .request_navigate(ViewTarget::Settings)
            .await
            .unwrap();
        portal.toggle_department("ti").await;
        assert_eq!(portal.current_view().await, Some(ViewTarget::Settings));

        portal.close_session().await;
        assert!(!portal.is_logged_in().await);
        assert!(portal.current_view().await.is_none());

        // A fresh login starts back on the dashboard with defaults.
        portal.open_session(Session::open(account(Role::Manager))).await;
        assert_eq!(portal.current_view().await, Some(ViewTarget::Dashboard));
        assert_eq!(portal.departments().await, vec!["rh", "vendas"]);
    }
}
