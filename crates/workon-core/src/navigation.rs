//! View navigation gate.
//!
//! Wraps the permission evaluator with the sensitive-area reauthentication
//! flow. All view changes go through this gate; nothing else mutates the
//! current view.

use crate::account::view_allowed;
use crate::session::Session;
use crate::view::ViewTarget;
use serde::{Deserialize, Serialize};

/// Interaction state of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GateState {
    /// Waiting for navigation requests.
    Idle,
    /// A reauthentication dialog is up; navigation is parked until it exits.
    AwaitingReauth,
}

/// What a navigation request resulted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The view change was committed.
    Committed,
    /// The legal area needs reauthentication first; a prompt was surfaced.
    ReauthRequired,
    /// The request was silently refused (no view change, no prompt).
    Refused,
}

/// The navigation state machine.
///
/// Owns the current view (there is always one; the gate starts on the
/// dashboard) and the reauthentication prompt state. Only the legal area is
/// reauth-protected: a denied navigation anywhere else is refused without
/// ceremony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGate {
    state: GateState,
    current: ViewTarget,
}

impl NavigationGate {
    /// Creates a gate in `Idle` on the dashboard.
    pub fn new() -> Self {
        Self {
            state: GateState::Idle,
            current: ViewTarget::Dashboard,
        }
    }

    /// The view currently committed.
    pub fn current_view(&self) -> ViewTarget {
        self.current
    }

    /// Current gate state.
    pub fn state(&self) -> GateState {
        self.state
    }

    /// True while the reauthentication prompt should be showing.
    pub fn awaiting_reauth(&self) -> bool {
        self.state == GateState::AwaitingReauth
    }

    /// Requests navigation to a view.
    ///
    /// Commits immediately when the role allows the view and, for the legal
    /// area, the session already holds the sensitive-area grant. A legal
    /// request without that grant parks the gate in `AwaitingReauth` and
    /// surfaces the prompt. Any other denial is refused silently. Requests
    /// arriving while the prompt is up are refused; the dialog owns the
    /// interaction until it exits.
    ///
    /// Re-committing the current view is a no-op observable-wise.
    pub fn request_navigate(&mut self, session: &Session, view: ViewTarget) -> NavigationOutcome {
        if self.state != GateState::Idle {
            tracing::debug!("[NavigationGate] refused {view}: reauth prompt is up");
            return NavigationOutcome::Refused;
        }

        let allowed = view_allowed(session.account.role, view);
        if allowed && (view != ViewTarget::Legal || session.sensitive_area_authenticated()) {
            self.current = view;
            return NavigationOutcome::Committed;
        }

        if view == ViewTarget::Legal {
            self.state = GateState::AwaitingReauth;
            tracing::debug!(
                "[NavigationGate] legal area requested by {}; awaiting reauth",
                session.account.role
            );
            return NavigationOutcome::ReauthRequired;
        }

        tracing::debug!(
            "[NavigationGate] refused {view} for role {}",
            session.account.role
        );
        NavigationOutcome::Refused
    }

    /// Surfaces the reauthentication prompt without a navigation request.
    ///
    /// Used by the dispatcher when a gated modal needs reauthentication.
    pub fn begin_reauth(&mut self) {
        self.state = GateState::AwaitingReauth;
    }

    /// Confirms a successful reauthentication.
    ///
    /// Grants the sensitive-area flag on the session, returns to `Idle` and
    /// commits the legal view. Password verification itself happens in the
    /// authentication use case before this is called.
    pub fn confirm_reauth(&mut self, session: &mut Session) {
        session.grant_sensitive_area();
        self.state = GateState::Idle;
        self.current = ViewTarget::Legal;
    }

    /// Records a failed reauthentication attempt.
    ///
    /// The gate stays in `AwaitingReauth` so the user can retry in place;
    /// only an explicit cancel or a success leaves the state.
    pub fn fail_reauth(&mut self) {
        debug_assert_eq!(self.state, GateState::AwaitingReauth);
    }

    /// Cancels the reauthentication dialog. Returns to `Idle` with the
    /// current view unchanged.
    pub fn cancel_reauth(&mut self) {
        self.state = GateState::Idle;
    }

    /// Resets the gate to its initial state (logout path).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for NavigationGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Role, UserAccount};

    fn session(role: Role) -> Session {
        Session::open(UserAccount::new("user@empresa.com", "Usuário", role))
    }

    #[test]
    fn open_views_commit_for_any_role() {
        let mut gate = NavigationGate::new();
        let s = session(Role::Intern);
        assert_eq!(
            gate.request_navigate(&s, ViewTarget::Settings),
            NavigationOutcome::Committed
        );
        assert_eq!(gate.current_view(), ViewTarget::Settings);
    }

    #[test]
    fn legal_without_grant_parks_in_awaiting_reauth() {
        let mut gate = NavigationGate::new();
        let s = session(Role::Collaborator);
        assert_eq!(
            gate.request_navigate(&s, ViewTarget::Legal),
            NavigationOutcome::ReauthRequired
        );
        assert!(gate.awaiting_reauth());
        // current view unchanged
        assert_eq!(gate.current_view(), ViewTarget::Dashboard);
    }

    #[test]
    fn legal_with_role_but_without_grant_still_requires_reauth() {
        let mut gate = NavigationGate::new();
        let s = session(Role::Admin);
        assert_eq!(
            gate.request_navigate(&s, ViewTarget::Legal),
            NavigationOutcome::ReauthRequired
        );
    }

    #[test]
    fn legal_with_grant_commits_directly() {
        let mut gate = NavigationGate::new();
        let mut s = session(Role::Legal);
        s.grant_sensitive_area();
        assert_eq!(
            gate.request_navigate(&s, ViewTarget::Legal),
            NavigationOutcome::Committed
        );
        assert_eq!(gate.current_view(), ViewTarget::Legal);
    }

    #[test]
    fn non_legal_denials_are_silent() {
        let mut gate = NavigationGate::new();
        let s = session(Role::Manager);
        assert_eq!(
            gate.request_navigate(&s, ViewTarget::Admin),
            NavigationOutcome::Refused
        );
        assert_eq!(gate.state(), GateState::Idle);
        assert_eq!(gate.current_view(), ViewTarget::Dashboard);
    }

    #[test]
    fn confirm_reauth_grants_commits_and_returns_to_idle() {
        let mut gate = NavigationGate::new();
        let mut s = session(Role::Collaborator);
        gate.request_navigate(&s, ViewTarget::Legal);
        gate.confirm_reauth(&mut s);
        assert_eq!(gate.state(), GateState::Idle);
        assert_eq!(gate.current_view(), ViewTarget::Legal);
        assert!(s.sensitive_area_authenticated());
    }

    #[test]
    fn failed_reauth_keeps_the_prompt_up() {
        let mut gate = NavigationGate::new();
        let s = session(Role::Collaborator);
        gate.request_navigate(&s, ViewTarget::Legal);
        gate.fail_reauth();
        assert!(gate.awaiting_reauth());
        assert_eq!(gate.current_view(), ViewTarget::Dashboard);
    }

    #[test]
    fn cancel_reauth_returns_to_idle_without_navigating() {
        let mut gate = NavigationGate::new();
        let s = session(Role::Collaborator);
        gate.request_navigate(&s, ViewTarget::Legal);
        gate.cancel_reauth();
        assert_eq!(gate.state(), GateState::Idle);
        assert_eq!(gate.current_view(), ViewTarget::Dashboard);
    }

    #[test]
    fn navigation_is_refused_while_the_prompt_is_up() {
        let mut gate = NavigationGate::new();
        let s = session(Role::Collaborator);
        gate.request_navigate(&s, ViewTarget::Legal);
        assert_eq!(
            gate.request_navigate(&s, ViewTarget::Settings),
            NavigationOutcome::Refused
        );
        assert!(gate.awaiting_reauth());
    }

    #[test]
    fn renavigating_to_the_current_view_is_idempotent() {
        let mut gate = NavigationGate::new();
        let s = session(Role::Collaborator);
        let first = gate.request_navigate(&s, ViewTarget::Dashboard);
        let second = gate.request_navigate(&s, ViewTarget::Dashboard);
        assert_eq!(first, NavigationOutcome::Committed);
        assert_eq!(second, NavigationOutcome::Committed);
        assert_eq!(gate.current_view(), ViewTarget::Dashboard);
        assert_eq!(gate.state(), GateState::Idle);
    }
}
