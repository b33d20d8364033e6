//! Login session domain model.

use crate::account::UserAccount;
use serde::{Deserialize, Serialize};

/// A login session.
///
/// Constructed when a login succeeds and dropped wholly at logout: being
/// logged in *is* owning a `Session`. The sensitive-area flag is the second,
/// independent authentication fact: it always starts false on a fresh login,
/// is set by a successful reauthentication, and then persists across
/// navigation for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated identity
    pub account: UserAccount,
    /// Whether the sensitive-area reauthentication has succeeded this session
    sensitive_area_authenticated: bool,
}

impl Session {
    /// Opens a fresh session for the given account.
    ///
    /// The sensitive-area flag is always reset: reauthentication never
    /// carries over from a previous login.
    pub fn open(account: UserAccount) -> Self {
        Self {
            account,
            sensitive_area_authenticated: false,
        }
    }

    /// Returns whether the sensitive-area reauthentication has succeeded.
    pub fn sensitive_area_authenticated(&self) -> bool {
        self.sensitive_area_authenticated
    }

    /// Marks the sensitive-area reauthentication as passed.
    pub fn grant_sensitive_area(&mut self) {
        self.sensitive_area_authenticated = true;
    }
}
