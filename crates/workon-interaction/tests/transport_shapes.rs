//! The transport may deliver a tool call in several shapes depending on the
//! SDK generation behind the endpoint; all of them must normalize to the
//! same `ClassifierReply`.

use serde_json::json;
use workon_core::intent::Intent;
use workon_interaction::assistant_api::{ChatCompletionResponse, parse_completion};

fn response(value: serde_json::Value) -> ChatCompletionResponse {
    serde_json::from_value(value).expect("Should deserialize transport response")
}

#[test]
fn modern_tool_calls_list_is_honored() {
    let reply = parse_completion(response(json!({
        "choices": [{
            "message": {
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {
                        "name": "abrir_relatorio_financeiro",
                        "arguments": "{\"mes\": \"09\"}"
                    }
                }]
            }
        }]
    })));

    assert_eq!(
        reply.intent,
        Some(Intent::OpenModal {
            target: "financeiro_detalhe".to_string(),
            filter: Some("09".to_string()),
            title: Some("Relatório Financeiro".to_string()),
        })
    );
    assert_eq!(reply.text, "Abrindo relatório financeiro referente a 09...");
}

#[test]
fn legacy_function_call_on_the_message_is_honored() {
    let reply = parse_completion(response(json!({
        "choices": [{
            "message": {
                "content": "Claro!",
                "function_call": {
                    "name": "navegar_para",
                    "arguments": "{\"view\": \"legal\"}"
                }
            }
        }]
    })));

    assert_eq!(
        reply.intent,
        Some(Intent::Navigate {
            target: "legal".to_string()
        })
    );
    assert_eq!(reply.text, "Navegando para a área de legal...");
}

#[test]
fn legacy_function_call_on_the_choice_is_honored() {
    let reply = parse_completion(response(json!({
        "choices": [{
            "message": { "content": "" },
            "function_call": {
                "name": "abrir_status_contratos",
                "arguments": "{}"
            }
        }]
    })));

    assert_eq!(
        reply.intent,
        Some(Intent::OpenModal {
            target: "juridico_status".to_string(),
            filter: None,
            title: Some("Resumo Jurídico & Contratos".to_string()),
        })
    );
    assert_eq!(reply.text, "Acessando indicadores contratuais e jurídicos...");
}

#[test]
fn only_the_first_tool_call_is_honored() {
    let reply = parse_completion(response(json!({
        "choices": [{
            "message": {
                "tool_calls": [
                    {"function": {"name": "navegar_para", "arguments": "{\"view\": \"vendas\"}"}},
                    {"function": {"name": "abrir_status_contratos", "arguments": "{}"}}
                ]
            }
        }]
    })));

    assert_eq!(
        reply.intent,
        Some(Intent::Navigate {
            target: "vendas".to_string()
        })
    );
}

#[test]
fn plain_text_answers_carry_no_intent() {
    let reply = parse_completion(response(json!({
        "choices": [{
            "message": { "content": "Olá! Como posso ajudar?" }
        }]
    })));

    assert!(reply.intent.is_none());
    assert_eq!(reply.text, "Olá! Como posso ajudar?");
    assert!(!reply.text.is_empty());
}

#[test]
fn block_array_content_is_flattened() {
    let reply = parse_completion(response(json!({
        "choices": [{
            "message": { "content": [{"text": "Bom dia! "}, "Em que posso ajudar?"] }
        }]
    })));

    assert_eq!(reply.text, "Bom dia! Em que posso ajudar?");
    assert!(reply.intent.is_none());
}

#[test]
fn malformed_tool_arguments_degrade_to_no_intent() {
    let reply = parse_completion(response(json!({
        "choices": [{
            "message": {
                "content": "Vou abrir o relatório.",
                "tool_calls": [{
                    "function": {"name": "abrir_relatorio_financeiro", "arguments": "{not json"}
                }]
            }
        }]
    })));

    assert!(reply.intent.is_none());
    assert_eq!(reply.text, "Vou abrir o relatório.");
}

#[test]
fn unknown_tool_names_degrade_to_no_intent() {
    let reply = parse_completion(response(json!({
        "choices": [{
            "message": {
                "content": "Hmm.",
                "tool_calls": [{
                    "function": {"name": "formatar_disco", "arguments": "{}"}
                }]
            }
        }]
    })));

    assert!(reply.intent.is_none());
    assert_eq!(reply.text, "Hmm.");
}

#[test]
fn empty_responses_fall_back_to_the_ack_reply() {
    let reply = parse_completion(response(json!({"choices": []})));
    assert!(reply.intent.is_none());
    assert_eq!(reply.text, "Entendido.");

    let reply = parse_completion(response(json!({
        "choices": [{"message": {"content": ""}}]
    })));
    assert_eq!(reply.text, "Entendido.");
}
