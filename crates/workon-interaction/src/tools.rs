//! Function-tool declarations for the completion service.
//!
//! Exactly three tools are declared; the completion service picks at most
//! one per turn. The tool names are shared with the intent parse boundary
//! in `workon-core`.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Value, json};
use workon_core::intent::{TOOL_FINANCIAL_REPORT, TOOL_LEGAL_STATUS, TOOL_NAVIGATE};

/// A callable tool as declared to the completion service.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: FunctionSpec,
}

/// Function payload of a tool declaration.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

/// The fixed tool set sent with every classification request.
pub static TOOLS: Lazy<Vec<ToolSpec>> = Lazy::new(|| {
    vec![
        ToolSpec {
            kind: "function",
            function: FunctionSpec {
                name: TOOL_NAVIGATE,
                description:
                    "Navega para uma área específica do sistema (Dashboard, Financeiro, Jurídico, etc).",
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "view": {
                            "type": "string",
                            "enum": [
                                "dashboard", "financeiro", "vendas", "rh",
                                "ti", "operacoes", "legal", "admin"
                            ],
                            "description": "O ID da visualização para onde navegar."
                        }
                    },
                    "required": ["view"]
                }),
            },
        },
        ToolSpec {
            kind: "function",
            function: FunctionSpec {
                name: TOOL_FINANCIAL_REPORT,
                description: "Abre um modal com detalhes financeiros de um mês específico.",
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "mes": {
                            "type": "string",
                            "description": "O número do mês (01 a 12) ou nome (janeiro, etc) para filtrar."
                        },
                        "titulo": {
                            "type": "string",
                            "description": "Um título descritivo para o relatório."
                        }
                    },
                    "required": ["mes"]
                }),
            },
        },
        ToolSpec {
            kind: "function",
            function: FunctionSpec {
                name: TOOL_LEGAL_STATUS,
                description:
                    "Abre um painel rápido com indicadores de contratos, vencimentos e processos jurídicos.",
                parameters: json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            },
        },
    ]
});

/// Status line shown in the chat while the requested action runs.
///
/// Returns `None` for tool names this adapter does not know.
pub fn action_reply_text(name: &str, args: &Value) -> Option<String> {
    match name {
        TOOL_NAVIGATE => {
            let view = args.get("view").and_then(Value::as_str).unwrap_or("dashboard");
            Some(format!("Navegando para a área de {view}..."))
        }
        TOOL_FINANCIAL_REPORT => {
            let month = args.get("mes").and_then(Value::as_str).unwrap_or("Atual");
            Some(format!("Abrindo relatório financeiro referente a {month}..."))
        }
        TOOL_LEGAL_STATUS => Some("Acessando indicadores contratuais e jurídicos...".to_string()),
        _ => None,
    }
}
