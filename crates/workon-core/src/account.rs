//! User account domain model and the permission evaluator.
//!
//! Role checks live here and nowhere else: every component that needs to
//! know whether a role may see a view asks [`view_allowed`].

use crate::view::ViewTarget;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of roles a portal account can hold.
///
/// Serialized with the product's display labels so payloads coming from the
/// backend user directory map directly onto the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Admin")]
    Admin,
    /// Legal department ("Jurídico")
    #[serde(rename = "Jurídico")]
    Legal,
    /// Team manager ("Gestor")
    #[serde(rename = "Gestor")]
    Manager,
    /// Regular employee ("Colaborador")
    #[serde(rename = "Colaborador")]
    Collaborator,
    /// Intern ("Estagiário")
    #[serde(rename = "Estagiário")]
    Intern,
    /// Operations staff ("Operação")
    #[serde(rename = "Operação")]
    Operations,
}

impl Role {
    /// Returns the product display label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Legal => "Jurídico",
            Role::Manager => "Gestor",
            Role::Collaborator => "Colaborador",
            Role::Intern => "Estagiário",
            Role::Operations => "Operação",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A logged-in user's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Corporate e-mail address
    pub email: String,
    /// Name shown in the header and chat panel
    pub display_name: String,
    /// Role driving view visibility
    pub role: Role,
}

impl UserAccount {
    /// Creates a new account record.
    pub fn new(email: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            role,
        }
    }
}

/// The permission evaluator: maps (role, target view) to allow/deny.
///
/// Pure and total. The legal center is restricted to Admin and Legal, the
/// admin panel to Admin, every other view is visible to all roles. The
/// sensitive-area authentication flag is a second, independent gate layered
/// on top by [`crate::navigation::NavigationGate`]; it is deliberately not
/// consulted here.
pub fn view_allowed(role: Role, view: ViewTarget) -> bool {
    match view {
        ViewTarget::Legal => matches!(role, Role::Admin | Role::Legal),
        ViewTarget::Admin => matches!(role, Role::Admin),
        ViewTarget::Dashboard | ViewTarget::Settings | ViewTarget::ClientCenter => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 6] = [
        Role::Admin,
        Role::Legal,
        Role::Manager,
        Role::Collaborator,
        Role::Intern,
        Role::Operations,
    ];

    #[test]
    fn legal_view_restricted_to_admin_and_legal() {
        for role in ALL_ROLES {
            let expected = matches!(role, Role::Admin | Role::Legal);
            assert_eq!(view_allowed(role, ViewTarget::Legal), expected, "{role}");
        }
    }

    #[test]
    fn admin_view_restricted_to_admin() {
        for role in ALL_ROLES {
            let expected = matches!(role, Role::Admin);
            assert_eq!(view_allowed(role, ViewTarget::Admin), expected, "{role}");
        }
    }

    #[test]
    fn open_views_allowed_for_everyone() {
        for role in ALL_ROLES {
            assert!(view_allowed(role, ViewTarget::Dashboard));
            assert!(view_allowed(role, ViewTarget::Settings));
            assert!(view_allowed(role, ViewTarget::ClientCenter));
        }
    }

    #[test]
    fn role_labels_round_trip_through_serde() {
        for role in ALL_ROLES {
            let json = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(role, back);
        }
    }
}
