//! Interaction layer: the external intent classifier adapter.
//!
//! Turns free-form chat into [`workon_core::intent::Intent`]s via an
//! OpenAI-compatible completion service with function tools.

pub mod assistant_api;
pub mod error;
pub mod tools;

pub use assistant_api::{AssistantApiClient, ClassifierReply, IntentClassifier, parse_completion};
pub use error::ClassifierError;
