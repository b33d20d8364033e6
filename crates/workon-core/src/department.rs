//! Business-unit departments and the per-session selection.

use serde::{Deserialize, Serialize};

/// A business unit whose panel can be pinned to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    /// Stable identifier used in selections and classifier payloads
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
}

/// Catalog of the departments the dashboard knows about.
pub const DEPARTMENTS: [Department; 5] = [
    Department { id: "rh", name: "Recursos Humanos" },
    Department { id: "vendas", name: "Vendas" },
    Department { id: "financeiro", name: "Financeiro" },
    Department { id: "ti", name: "Tecnologia" },
    Department { id: "operacoes", name: "Operações" },
];

/// Department id of the financial unit, special-cased by the dispatcher.
pub const FINANCIAL_DEPARTMENT: &str = "financeiro";

/// Departments every fresh session starts with.
pub const DEFAULT_DEPARTMENTS: [&str; 2] = ["rh", "vendas"];

/// The set of departments a session currently has expanded on the dashboard.
///
/// Membership is unique; insertion order is preserved because some views
/// render panels in the order they were pinned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSelection {
    ids: Vec<String>,
}

impl DepartmentSelection {
    /// Creates a selection holding the default departments.
    pub fn new() -> Self {
        Self {
            ids: DEFAULT_DEPARTMENTS.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Creates an empty selection.
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Returns true if the department is currently selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Adds the department if absent. Returns true if it was added.
    pub fn ensure(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Toggles the department: removes it if present, appends it otherwise.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Replaces the whole selection, dropping duplicates while keeping the
    /// first occurrence's position.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = String>) {
        self.ids.clear();
        for id in ids {
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Resets back to the default selection.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of selected departments.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for DepartmentSelection {
    fn default() -> Self {
        Self::new()
    }
}
