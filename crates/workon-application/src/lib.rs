//! Application layer of the Work On portal.
//!
//! Use cases wiring the domain core to the classifier adapter and the
//! account directory: authentication, the portal facade and the chat panel.

pub mod auth_usecase;
mod busy;
pub mod chat_usecase;
pub mod portal_usecase;

pub use auth_usecase::AuthUseCase;
pub use chat_usecase::{ChatOutcome, ChatUseCase};
pub use portal_usecase::PortalUseCase;
