//! Chat panel use case: transcript, classification and action dispatch.

use crate::busy;
use crate::portal_usecase::PortalUseCase;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio::sync::RwLock;
use workon_core::dispatch::DispatchOutcome;
use workon_core::message::ChatMessage;
use workon_core::{Result, WorkonError};
use workon_interaction::IntentClassifier;

/// Greeting shown when the panel opens.
const GREETING: &str = "Olá! Sou o assistente Work On com IA. Posso controlar o sistema para \
                        você. Tente: 'Mostre o financeiro de setembro' ou 'Resumo jurídico'.";

/// Reply shown when the classifier transport fails.
const TRANSPORT_APOLOGY: &str = "Desculpe, tive um erro ao processar sua solicitação. Verifique \
                                 sua conexão ou a API Key.";

/// What sending a chat message resulted in.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    /// The assistant replied; an intent may have been dispatched.
    Replied {
        message: ChatMessage,
        dispatch: Option<DispatchOutcome>,
    },
    /// The transport failed; the apology reply was appended, nothing else
    /// changed. Retry by re-sending the message.
    Failed { message: ChatMessage },
    /// The panel was closed while the request was in flight; the late
    /// response was discarded without touching any state.
    Discarded,
    /// Blank input; nothing was sent.
    Ignored,
}

struct ChatState {
    transcript: Vec<ChatMessage>,
    /// Bumped when the panel closes so in-flight replies can detect they
    /// were abandoned.
    epoch: u64,
}

impl ChatState {
    fn fresh() -> Self {
        Self {
            transcript: vec![ChatMessage::from_assistant(GREETING, None)],
            epoch: 0,
        }
    }
}

/// Drives the chat panel: keeps the transcript, runs the classifier and
/// routes resulting intents into the portal dispatcher.
pub struct ChatUseCase {
    classifier: Arc<dyn IntentClassifier>,
    portal: Arc<PortalUseCase>,
    state: RwLock<ChatState>,
    in_flight: AtomicBool,
}

impl ChatUseCase {
    pub fn new(classifier: Arc<dyn IntentClassifier>, portal: Arc<PortalUseCase>) -> Self {
        Self {
            classifier,
            portal,
            state: RwLock::new(ChatState::fresh()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Transcript snapshot, greeting first.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.state.read().await.transcript.clone()
    }

    /// True while a message is being classified; the UI disables the send
    /// control for the duration.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(std::sync::atomic::Ordering::SeqCst)
    }

    /// Closes the panel: the transcript resets and any in-flight reply is
    /// abandoned (it will come back as [`ChatOutcome::Discarded`]).
    pub async fn close_panel(&self) {
        let mut state = self.state.write().await;
        let epoch = state.epoch;
        *state = ChatState::fresh();
        state.epoch = epoch + 1;
    }

    /// Sends a user message through the classifier and dispatches whatever
    /// intent comes back.
    ///
    /// Double submits are refused with [`WorkonError::Busy`]. A transport
    /// failure appends the apology reply and mutates nothing else. A reply
    /// that lands after the panel closed is dropped entirely.
    pub async fn send_message(&self, text: &str) -> Result<ChatOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(ChatOutcome::Ignored);
        }
        if !self.portal.is_logged_in().await {
            return Err(WorkonError::security("Usuário não autenticado"));
        }

        let _guard = busy::acquire(&self.in_flight, "chat message")?;

        let (history, epoch) = {
            let mut state = self.state.write().await;
            state.transcript.push(ChatMessage::from_user(text));
            (state.transcript.clone(), state.epoch)
        };

        let classified = self.classifier.classify(&history).await;

        let mut state = self.state.write().await;
        if state.epoch != epoch {
            tracing::debug!("[Chat] discarding late reply for a closed panel");
            return Ok(ChatOutcome::Discarded);
        }

        let reply = match classified {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("[Chat] classifier failed: {err}");
                let message = ChatMessage::from_assistant(TRANSPORT_APOLOGY, None);
                state.transcript.push(message.clone());
                return Ok(ChatOutcome::Failed { message });
            }
        };

        let message = ChatMessage::from_assistant(reply.text, reply.intent.clone());
        state.transcript.push(message.clone());
        drop(state);

        let dispatch = match &reply.intent {
            Some(intent) => Some(self.portal.dispatch(intent).await?),
            None => None,
        };

        Ok(ChatOutcome::Replied { message, dispatch })
    }
}
