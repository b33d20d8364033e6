//! Intent classifier backed by an OpenAI-compatible chat completions API.
//!
//! The classifier sends the chat history plus a fixed system instruction,
//! declares the three UI tools, and normalizes whatever the transport
//! returns into a single [`ClassifierReply`] shape. Configuration priority:
//! ~/.config/workon/secret.json > environment variables.

use crate::error::ClassifierError;
use crate::tools::{TOOLS, ToolSpec, action_reply_text};
use async_trait::async_trait;
use chrono::Local;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::time::Duration;
use workon_core::intent::Intent;
use workon_core::message::ChatMessage;
use workon_infrastructure::SecretStorage;

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Fallback reply when the model sent neither text nor a usable tool call.
const ACK_REPLY: &str = "Entendido.";

/// What a classification produced: the assistant's reply text and, when the
/// model invoked a tool, the validated intent.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierReply {
    pub text: String,
    pub intent: Option<Intent>,
}

/// Maps a conversation onto a reply and an optional UI intent.
///
/// Implemented by [`AssistantApiClient`] for production and by stubs in
/// tests; the application layer only sees this trait.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classifies the conversation so far. I/O-bound and fallible.
    async fn classify(&self, history: &[ChatMessage]) -> Result<ClassifierReply, ClassifierError>;
}

/// Client for the OpenAI chat completions API.
#[derive(Clone)]
pub struct AssistantApiClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: Option<u32>,
}

impl AssistantApiClient {
    /// Creates a new client with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: None,
        }
    }

    /// Loads configuration from ~/.config/workon/secret.json or environment
    /// variables.
    ///
    /// Priority:
    /// 1. ~/.config/workon/secret.json
    /// 2. Environment variables (OPENAI_API_KEY, OPENAI_MODEL_NAME)
    ///
    /// Model name defaults to `gpt-3.5-turbo` if not specified.
    pub fn try_from_env() -> Result<Self, ClassifierError> {
        if let Ok(storage) = SecretStorage::new() {
            if let Ok(secret_config) = storage.load() {
                if let Some(openai_config) = secret_config.openai {
                    let model = openai_config
                        .model_name
                        .unwrap_or_else(|| DEFAULT_MODEL.into());
                    return Ok(Self::new(openai_config.api_key, model));
                }
            }
        }

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            ClassifierError::Credentials(
                "OPENAI_API_KEY not found in ~/.config/workon/secret.json or environment variables"
                    .into(),
            )
        })?;

        let model = env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    fn build_messages(history: &[ChatMessage]) -> Vec<ApiMessage> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ApiMessage {
            role: "system".to_string(),
            content: system_instruction(),
        });
        messages.extend(history.iter().map(|message| ApiMessage {
            role: message.role.wire_name().to_string(),
            content: message.text.clone(),
        }));
        messages
    }

    async fn send_request(
        &self,
        body: &ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, ClassifierError> {
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| ClassifierError::Transport {
                status_code: None,
                message: format!("completion request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
                retry_after: None,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read completion error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        response.json().await.map_err(|err| {
            ClassifierError::InvalidResponse(format!("failed to parse completion response: {err}"))
        })
    }
}

#[async_trait]
impl IntentClassifier for AssistantApiClient {
    async fn classify(&self, history: &[ChatMessage]) -> Result<ClassifierReply, ClassifierError> {
        let messages = Self::build_messages(history);
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            tools: TOOLS.as_slice(),
            tool_choice: "auto",
            max_tokens: self.max_tokens,
        };

        let response = self.send_request(&request).await?;
        Ok(parse_completion(response))
    }
}

/// The fixed system instruction, dated for relative-month questions.
fn system_instruction() -> String {
    format!(
        "Você é o assistente inteligente do sistema 'Work On'. \
         Você tem controle sobre a interface do usuário. \
         Sempre que o usuário pedir para ver dados ou ir para uma tela, USE AS FERRAMENTAS DISPONÍVEIS. \
         Se a pergunta for genérica (ex: \"olá\"), responda educadamente. \
         Hoje é {}.",
        Local::now().format("%d/%m/%Y")
    )
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: String,
    messages: Vec<ApiMessage>,
    tools: &'a [ToolSpec],
    tool_choice: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

/// Transport response. Every field the different SDK generations disagree
/// about is optional; normalization happens in [`parse_completion`].
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChoiceEnvelope>,
}

#[derive(Debug, Deserialize)]
struct ChoiceEnvelope {
    #[serde(default)]
    message: Option<MessageEnvelope>,
    /// Legacy placement: some transports hang the function call off the choice.
    #[serde(default)]
    function_call: Option<FunctionCallEnvelope>,
}

#[derive(Debug, Default, Deserialize)]
struct MessageEnvelope {
    /// String, block array or object depending on the SDK generation.
    #[serde(default)]
    content: Option<Value>,
    #[serde(default)]
    tool_calls: Option<Vec<ToolCallEnvelope>>,
    /// Legacy single function call on the message.
    #[serde(default)]
    function_call: Option<FunctionCallEnvelope>,
}

#[derive(Debug, Deserialize)]
struct ToolCallEnvelope {
    #[serde(default)]
    function: Option<FunctionCallEnvelope>,
}

#[derive(Debug, Deserialize)]
struct FunctionCallEnvelope {
    #[serde(default)]
    name: Option<String>,
    /// JSON-encoded argument object.
    #[serde(default)]
    arguments: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

// ============================================================================
// Response normalization
// ============================================================================

/// Normalizes a transport response into a [`ClassifierReply`].
///
/// Only the first tool call is honored; additional calls in the same
/// response are ignored. An argument-JSON parse failure or an unknown tool
/// name degrades to "no intent" with the free-form text kept, never an
/// error. Pure, so the shape matrix is testable offline.
pub fn parse_completion(response: ChatCompletionResponse) -> ClassifierReply {
    let Some(choice) = response.choices.into_iter().next() else {
        return ClassifierReply {
            text: ACK_REPLY.to_string(),
            intent: None,
        };
    };

    let message = choice.message.unwrap_or_default();
    let content = normalize_content(message.content.as_ref());

    let first_call = message
        .tool_calls
        .into_iter()
        .flatten()
        .find_map(|call| call.function)
        .or(message.function_call)
        .or(choice.function_call);

    let mut intent = None;
    let mut text = content;

    if let Some(call) = first_call {
        if let Some(name) = call.name.as_deref() {
            let raw_arguments = call.arguments.as_deref().unwrap_or("{}");
            match serde_json::from_str::<Value>(raw_arguments) {
                Ok(args) => {
                    intent = Intent::from_tool_call(name, &args);
                    if intent.is_some() {
                        if let Some(reply) = action_reply_text(name, &args) {
                            text = reply;
                        }
                    }
                }
                Err(err) => {
                    tracing::debug!(
                        "[AssistantApi] dropping tool call {name:?}: bad arguments ({err})"
                    );
                }
            }
        }
    }

    if text.is_empty() {
        text = ACK_REPLY.to_string();
    }

    ClassifierReply { text, intent }
}

/// Flattens the content field across SDK generations: a plain string, an
/// array of text blocks, or an object carrying `text`/`parts`.
fn normalize_content(content: Option<&Value>) -> String {
    match content {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(blocks)) => blocks
            .iter()
            .map(|block| match block {
                Value::String(text) => text.as_str(),
                Value::Object(_) => block.get("text").and_then(Value::as_str).unwrap_or(""),
                _ => "",
            })
            .collect(),
        Some(Value::Object(object)) => {
            if let Some(text) = object.get("text").and_then(Value::as_str) {
                return text.to_string();
            }
            object
                .get("parts")
                .and_then(Value::as_array)
                .map(|parts| {
                    parts
                        .iter()
                        .filter_map(Value::as_str)
                        .collect::<String>()
                })
                .unwrap_or_default()
        }
        Some(_) => String::new(),
    }
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> ClassifierError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    ClassifierError::Transport {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
        retry_after,
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}
