//! End-to-end flows: login, chat classification through the real transport
//! parser, dispatch, and the sensitive-area reauthentication path.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use workon_application::{AuthUseCase, ChatOutcome, ChatUseCase, PortalUseCase};
use workon_core::dispatch::DispatchOutcome;
use workon_core::message::ChatMessage;
use workon_core::modal::ReportKind;
use workon_core::view::ViewTarget;
use workon_infrastructure::StaticAccountDirectory;
use workon_interaction::{ClassifierError, ClassifierReply, IntentClassifier, parse_completion};

/// Classifier stub that runs a canned transport payload through the real
/// response normalization.
struct CannedTransport {
    payload: serde_json::Value,
}

#[async_trait]
impl IntentClassifier for CannedTransport {
    async fn classify(
        &self,
        _history: &[ChatMessage],
    ) -> Result<ClassifierReply, ClassifierError> {
        let response =
            serde_json::from_value(self.payload.clone()).expect("Should parse canned payload");
        Ok(parse_completion(response))
    }
}

/// Classifier stub that blocks until released, to exercise in-flight rules.
struct GatedClassifier {
    release: Arc<Notify>,
    payload: serde_json::Value,
}

#[async_trait]
impl IntentClassifier for GatedClassifier {
    async fn classify(
        &self,
        _history: &[ChatMessage],
    ) -> Result<ClassifierReply, ClassifierError> {
        self.release.notified().await;
        let response =
            serde_json::from_value(self.payload.clone()).expect("Should parse canned payload");
        Ok(parse_completion(response))
    }
}

fn financial_report_payload() -> serde_json::Value {
    json!({
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
    })
}

fn legal_status_payload() -> serde_json::Value {
    json!({
        "choices": [{
            "message": {
                "content": "",
                "tool_calls": [{
                    "function": {"name": "abrir_status_contratos", "arguments": "{}"}
                }]
            }
        }]
    })
}

fn setup(classifier: Arc<dyn IntentClassifier>) -> (AuthUseCase, Arc<PortalUseCase>, ChatUseCase) {
    let portal = PortalUseCase::new();
    let auth = AuthUseCase::new(Arc::new(StaticAccountDirectory::new()), portal.clone())
        .with_delays(Duration::ZERO, Duration::ZERO);
    let chat = ChatUseCase::new(classifier, portal.clone());
    (auth, portal, chat)
}

#[tokio::test]
async fn admin_asks_for_september_financials_and_the_modal_opens() {
    let classifier = Arc::new(CannedTransport {
        payload: financial_report_payload(),
    });
    let (auth, portal, chat) = setup(classifier);

    auth.login("admin@empresa.com", "1234").await.unwrap();

    let outcome = chat
        .send_message("Mostre o financeiro de setembro")
        .await
        .unwrap();
    match outcome {
        ChatOutcome::Replied { dispatch, message } => {
            assert_eq!(dispatch, Some(DispatchOutcome::ModalOpened));
            assert_eq!(message.text, "Abrindo relatório financeiro referente a 09...");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let content = portal.modal_content().await.expect("modal should be open");
    assert_eq!(
        content.kind,
        ReportKind::Financial {
            month: "Setembro".to_string()
        }
    );
    assert_eq!(content.title, "Relatório Financeiro");
    // The modal opened over the dashboard; no navigation happened.
    assert_eq!(portal.current_view().await, Some(ViewTarget::Dashboard));
}

#[tokio::test]
async fn collaborator_legal_summary_is_parked_behind_reauth_and_not_replayed() {
    let classifier = Arc::new(CannedTransport {
        payload: legal_status_payload(),
    });
    let (auth, portal, chat) = setup(classifier);

    auth.login("colaborador@empresa.com", "1234").await.unwrap();

    let outcome = chat.send_message("Resumo jurídico").await.unwrap();
    match outcome {
        ChatOutcome::Replied { dispatch, .. } => {
            assert_eq!(dispatch, Some(DispatchOutcome::ReauthRequired));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(portal.modal_content().await.is_none());
    assert!(portal.awaiting_reauth().await);

    // Reauth succeeds: the legal view commits but the modal request is not
    // replayed; the user asks again.
    auth.reauthenticate("segredo").await.unwrap();
    assert_eq!(portal.current_view().await, Some(ViewTarget::Legal));
    assert!(portal.modal_content().await.is_none());

    // With the grant in hand the same request now opens the modal directly.
    let outcome = chat.send_message("Resumo jurídico").await.unwrap();
    match outcome {
        ChatOutcome::Replied { dispatch, .. } => {
            assert_eq!(dispatch, Some(DispatchOutcome::ModalOpened));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    let content = portal.modal_content().await.unwrap();
    assert_eq!(content.kind, ReportKind::Legal);
    assert_eq!(content.title, "Resumo Jurídico & Contratos");
}

#[tokio::test]
async fn classifier_navigation_to_legal_respects_the_gate() {
    let classifier = Arc::new(CannedTransport {
        payload: json!({
            "choices": [{
                "message": {
                    "function_call": {"name": "navegar_para", "arguments": "{\"view\": \"legal\"}"}
                }
            }]
        }),
    });
    let (auth, portal, chat) = setup(classifier);

    auth.login("gestor@empresa.com", "1234").await.unwrap();
    let outcome = chat.send_message("vá para o jurídico").await.unwrap();
    match outcome {
        ChatOutcome::Replied { dispatch, .. } => {
            assert_eq!(dispatch, Some(DispatchOutcome::ReauthRequired));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(portal.current_view().await, Some(ViewTarget::Dashboard));
    assert!(portal.awaiting_reauth().await);
}

#[tokio::test(flavor = "multi_thread")]
async fn a_second_send_while_one_is_in_flight_is_refused() {
    let release = Arc::new(Notify::new());
    let classifier = Arc::new(GatedClassifier {
        release: release.clone(),
        payload: financial_report_payload(),
    });
    let (auth, _portal, chat) = setup(classifier);
    auth.login("admin@empresa.com", "1234").await.unwrap();

    let chat = Arc::new(chat);
    let first = {
        let chat = chat.clone();
        tokio::spawn(async move { chat.send_message("primeira").await })
    };

    // Wait until the first send is actually holding the in-flight flag.
    while !chat.is_busy() {
        tokio::task::yield_now().await;
    }

    let err = chat.send_message("segunda").await.unwrap_err();
    assert!(err.is_busy());

    release.notify_one();
    let outcome = first.await.unwrap().unwrap();
    assert!(matches!(outcome, ChatOutcome::Replied { .. }));
    assert!(!chat.is_busy());
}

#[tokio::test(flavor = "multi_thread")]
async fn a_reply_landing_after_the_panel_closed_is_discarded() {
    let release = Arc::new(Notify::new());
    let classifier = Arc::new(GatedClassifier {
        release: release.clone(),
        payload: financial_report_payload(),
    });
    let (auth, portal, chat) = setup(classifier);
    auth.login("admin@empresa.com", "1234").await.unwrap();

    let chat = Arc::new(chat);
    let pending = {
        let chat = chat.clone();
        tokio::spawn(async move { chat.send_message("mostre o financeiro").await })
    };

    while !chat.is_busy() {
        tokio::task::yield_now().await;
    }

    // The user abandons the chat before the answer arrives.
    chat.close_panel().await;
    release.notify_one();

    let outcome = pending.await.unwrap().unwrap();
    assert_eq!(outcome, ChatOutcome::Discarded);

    // No write to the abandoned state: fresh transcript, no modal.
    assert_eq!(chat.transcript().await.len(), 1);
    assert!(portal.modal_content().await.is_none());
}

#[tokio::test]
async fn logout_resets_view_modal_and_departments() {
    let classifier = Arc::new(CannedTransport {
        payload: financial_report_payload(),
    });
    let (auth, portal, chat) = setup(classifier);

    auth.login("admin@empresa.com", "1234").await.unwrap();
    chat.send_message("financeiro de setembro").await.unwrap();
    portal.toggle_department("ti").await;
    assert!(portal.modal_content().await.is_some());

    auth.logout().await;
    assert!(!portal.is_logged_in().await);
    assert!(portal.modal_content().await.is_none());
    assert_eq!(portal.departments().await, vec!["rh", "vendas"]);
}
