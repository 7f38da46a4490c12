//! Chat gateway traits.
//!
//! The concierge talks to a hosted language model through these two seams:
//! a connector that opens the chat session once, and the session itself.

use crate::error::Result;
use std::sync::Arc;

/// A stateful chat session with the hosted model.
///
/// The session keeps its own conversation history; each call sends one user
/// message and receives one text reply.
#[async_trait::async_trait]
pub trait ChatGateway: Send + Sync {
    /// Sends `message` and returns the model's reply.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The reply text; empty when the model produced no text
    /// - `Err(AurumError)`: The request failed
    async fn send_message(&self, message: &str) -> Result<String>;
}

/// Opens chat sessions.
///
/// Connecting fails with `AurumError::NotConfigured` when no credential is
/// available, so the caller gets a typed result instead of a panic.
#[async_trait::async_trait]
pub trait ChatConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn ChatGateway>>;
}
