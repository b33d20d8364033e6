//! View targets and the classifier-facing view-name normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The top-level views of the portal.
///
/// Exactly one view is current at any time; [`crate::navigation::NavigationGate`]
/// owns the current value and starts at [`ViewTarget::Dashboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewTarget {
    Dashboard,
    Settings,
    Admin,
    Legal,
    ClientCenter,
}

impl ViewTarget {
    /// Returns the canonical token for this view ("dashboard", "client-center", ...).
    pub fn token(&self) -> &'static str {
        match self {
            ViewTarget::Dashboard => "dashboard",
            ViewTarget::Settings => "settings",
            ViewTarget::Admin => "admin",
            ViewTarget::Legal => "legal",
            ViewTarget::ClientCenter => "client-center",
        }
    }

    /// Normalizes a raw view name coming from the classifier or a deep link.
    ///
    /// Case-insensitive fixed mapping. Department tokens collapse onto the
    /// dashboard (the dashboard hosts the department panels), Portuguese
    /// aliases map onto their views, and anything unrecognized falls back to
    /// the dashboard. This function never fails; callers rely on always
    /// getting a valid view back.
    pub fn normalize(raw: &str) -> ViewTarget {
        match raw.trim().to_lowercase().as_str() {
            "dashboard" | "financeiro" | "vendas" | "rh" | "ti" | "operacoes" => {
                ViewTarget::Dashboard
            }
            "settings" | "configuracoes" => ViewTarget::Settings,
            "admin" | "administracao" => ViewTarget::Admin,
            "legal" | "juridico" => ViewTarget::Legal,
            "client-center" | "clientes" => ViewTarget::ClientCenter,
            _ => ViewTarget::Dashboard,
        }
    }
}

impl Default for ViewTarget {
    fn default() -> Self {
        ViewTarget::Dashboard
    }
}

impl fmt::Display for ViewTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
