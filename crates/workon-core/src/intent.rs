//! Validated UI intents and the classifier parse boundary.
//!
//! The classifier returns loosely-typed tool invocations; everything that
//! crosses into the dispatcher must first pass through
//! [`Intent::from_tool_call`]. Whatever fails validation becomes "no intent"
//! rather than propagating untyped data inward.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool name the classifier uses to request navigation.
pub const TOOL_NAVIGATE: &str = "navegar_para";
/// Tool name the classifier uses to open the financial report modal.
pub const TOOL_FINANCIAL_REPORT: &str = "abrir_relatorio_financeiro";
/// Tool name the classifier uses to open the legal/contract summary modal.
pub const TOOL_LEGAL_STATUS: &str = "abrir_status_contratos";

/// Modal target token for the financial detail report.
pub const MODAL_FINANCIAL_DETAIL: &str = "financeiro_detalhe";
/// Modal target token for the legal/contract status summary.
pub const MODAL_LEGAL_STATUS: &str = "juridico_status";

/// A normalized, validated instruction for the dispatcher.
///
/// `target` fields carry raw classifier text on purpose: normalization
/// against the view table happens inside the dispatcher, where the
/// pre-normalization department special case can still see the original
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Intent {
    /// Navigate to a view (raw, unvalidated view name).
    Navigate {
        target: String,
    },
    /// Open a data modal keyed by a raw target token.
    OpenModal {
        target: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filter: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl Intent {
    /// Converts a classifier tool invocation into a validated intent.
    ///
    /// Returns `None` for unknown tool names and for payloads missing their
    /// required fields; the caller treats that as "no intent". Never panics,
    /// whatever the classifier produced.
    pub fn from_tool_call(name: &str, args: &Value) -> Option<Intent> {
        match name {
            TOOL_NAVIGATE => {
                let target = args.get("view")?.as_str()?;
                if target.trim().is_empty() {
                    return None;
                }
                Some(Intent::Navigate {
                    target: target.to_string(),
                })
            }
            TOOL_FINANCIAL_REPORT => Some(Intent::OpenModal {
                target: MODAL_FINANCIAL_DETAIL.to_string(),
                filter: args
                    .get("mes")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                title: args
                    .get("titulo")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .or_else(|| Some("Relatório Financeiro".to_string())),
            }),
            TOOL_LEGAL_STATUS => Some(Intent::OpenModal {
                target: MODAL_LEGAL_STATUS.to_string(),
                filter: None,
                title: Some("Resumo Jurídico & Contratos".to_string()),
            }),
            _ => None,
        }
    }
}
