//! Account directory: resolves a login e-mail to a portal account.

use workon_core::account::{Role, UserAccount};

/// Resolves corporate e-mail addresses to portal accounts.
///
/// Abstracted so the static development directory can be swapped for the
/// real identity backend without touching the authentication use case.
pub trait AccountDirectory: Send + Sync {
    /// Resolves an account for the e-mail, if the directory knows one.
    fn resolve(&self, email: &str) -> Option<UserAccount>;
}

/// Development directory resolving accounts by e-mail substring.
///
/// Mirrors the seeded corporate accounts: any e-mail containing a known
/// role token maps onto that role's demo account; everything else falls
/// back to a generic Colaborador identity so a login never dead-ends.
#[derive(Debug, Clone, Default)]
pub struct StaticAccountDirectory;

impl StaticAccountDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl AccountDirectory for StaticAccountDirectory {
    fn resolve(&self, email: &str) -> Option<UserAccount> {
        let lower = email.to_lowercase();

        let account = if lower.contains("admin") {
            UserAccount::new("admin@empresa.com", "Ana Silva", Role::Admin)
        } else if lower.contains("juridico") {
            UserAccount::new("juridico@empresa.com", "Dr. Ricardo Alves", Role::Legal)
        } else if lower.contains("gestor") {
            UserAccount::new("gestor@empresa.com", "Carlos Santos", Role::Manager)
        } else if lower.contains("estagiario") {
            UserAccount::new("estagiario@empresa.com", "Patricia Costa", Role::Intern)
        } else if lower.contains("operacao") {
            UserAccount::new("operacao@empresa.com", "Roberto Lima", Role::Operations)
        } else if lower.contains("colaborador") {
            UserAccount::new("colaborador@empresa.com", "Maria Oliveira", Role::Collaborator)
        } else {
            // Unknown addresses still get in as a plain Colaborador.
            UserAccount::new(email, "Usuário", Role::Collaborator)
        };

        Some(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_resolve_to_seeded_accounts() {
        let directory = StaticAccountDirectory::new();
        let account = directory.resolve("admin@empresa.com").unwrap();
        assert_eq!(account.role, Role::Admin);
        assert_eq!(account.display_name, "Ana Silva");

        let account = directory.resolve("juridico@empresa.com").unwrap();
        assert_eq!(account.role, Role::Legal);
    }

    #[test]
    fn resolution_is_substring_based_and_case_insensitive() {
        let directory = StaticAccountDirectory::new();
        let account = directory.resolve("GESTOR.vendas@empresa.com").unwrap();
        assert_eq!(account.role, Role::Manager);
    }

    #[test]
    fn unknown_addresses_fall_back_to_collaborator() {
        let directory = StaticAccountDirectory::new();
        let account = directory.resolve("fulano@empresa.com").unwrap();
        assert_eq!(account.role, Role::Collaborator);
        assert_eq!(account.email, "fulano@empresa.com");
        assert_eq!(account.display_name, "Usuário");
    }
}
