//! Action intent dispatcher.
//!
//! Receives validated [`Intent`]s and routes them through the navigation
//! gate or the modal store. This is the single entry point for
//! classifier-triggered UI mutations; it never panics, whatever the
//! classifier produced.

use crate::account::view_allowed;
use crate::department::{DepartmentSelection, FINANCIAL_DEPARTMENT};
use crate::intent::{Intent, MODAL_FINANCIAL_DETAIL, MODAL_LEGAL_STATUS};
use crate::modal::{ModalStore, ReportContent};
use crate::month::normalize_month;
use crate::navigation::{NavigationGate, NavigationOutcome};
use crate::session::Session;
use crate::view::ViewTarget;
use serde::{Deserialize, Serialize};

/// Default modal title for the financial detail report.
const FINANCIAL_MODAL_TITLE: &str = "Análise Financeira";
/// Default modal title for the legal summary.
const LEGAL_MODAL_TITLE: &str = "Jurídico";

/// What dispatching an intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A view change was committed through the gate.
    Navigated(ViewTarget),
    /// The financial department was pinned to the dashboard selection.
    DepartmentPinned,
    /// A report modal was opened (replacing any live one).
    ModalOpened,
    /// Reauthentication is required first; the prompt was surfaced.
    ReauthRequired,
    /// The gate refused the request (no view change, no prompt).
    Refused,
    /// The intent carried an unrecognized payload and was dropped.
    Ignored,
}

/// Transient dashboard state for one login session.
///
/// Owns the navigation gate, the department selection and the modal store.
/// Constructed at login, torn down at logout. The session itself is passed
/// in by the caller so the dispatcher never holds authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub gate: NavigationGate,
    pub departments: DepartmentSelection,
    pub modal: ModalStore,
}

impl DashboardState {
    /// Fresh state: gate idle on the dashboard, default departments, no modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets everything back to the post-login defaults.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Dispatches a validated intent.
    ///
    /// Navigation intents route through the gate so the legal reauth rules
    /// apply even when triggered by the classifier. Modal intents either set
    /// the modal content or, for the gated legal summary, surface the
    /// reauthentication prompt instead; the modal is not replayed after
    /// reauth succeeds. Unrecognized payloads are dropped silently.
    pub fn dispatch(&mut self, session: &Session, intent: &Intent) -> DispatchOutcome {
        match intent {
            Intent::Navigate { target } => self.dispatch_navigate(session, target),
            Intent::OpenModal {
                target,
                filter,
                title,
            } => self.dispatch_modal(session, target, filter.as_deref(), title.as_deref()),
        }
    }

    fn dispatch_navigate(&mut self, session: &Session, target: &str) -> DispatchOutcome {
        // The financial department token is not a view name: it means "stay
        // on the dashboard and make sure the financial panel is pinned".
        // Matched before normalization, which would collapse it onto the
        // dashboard and lose the distinction.
        if target == FINANCIAL_DEPARTMENT {
            self.gate.request_navigate(session, ViewTarget::Dashboard);
            self.departments.ensure(FINANCIAL_DEPARTMENT);
            tracing::debug!("[Dispatcher] pinned the financial department");
            return DispatchOutcome::DepartmentPinned;
        }

        let view = ViewTarget::normalize(target);
        match self.gate.request_navigate(session, view) {
            NavigationOutcome::Committed => DispatchOutcome::Navigated(view),
            NavigationOutcome::ReauthRequired => DispatchOutcome::ReauthRequired,
            NavigationOutcome::Refused => DispatchOutcome::Refused,
        }
    }

    fn dispatch_modal(
        &mut self,
        session: &Session,
        target: &str,
        filter: Option<&str>,
        title: Option<&str>,
    ) -> DispatchOutcome {
        match target {
            MODAL_FINANCIAL_DETAIL => {
                let month = normalize_month(filter);
                let title = title.unwrap_or(FINANCIAL_MODAL_TITLE);
                self.modal.open(ReportContent::financial(title, month));
                DispatchOutcome::ModalOpened
            }
            MODAL_LEGAL_STATUS => {
                let clear = session.sensitive_area_authenticated()
                    || view_allowed(session.account.role, ViewTarget::Legal);
                if !clear {
                    self.gate.begin_reauth();
                    tracing::debug!("[Dispatcher] legal summary gated; awaiting reauth");
                    return DispatchOutcome::ReauthRequired;
                }
                let title = title.unwrap_or(LEGAL_MODAL_TITLE);
                self.modal.open(ReportContent::legal(title));
                DispatchOutcome::ModalOpened
            }
            other => {
                tracing::debug!("[Dispatcher] dropped unrecognized modal target {other:?}");
                DispatchOutcome::Ignored
            }
        }
    }
}
