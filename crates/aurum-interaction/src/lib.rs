//! Interaction layer: the concierge's hosted-model chat gateway.

pub mod connector;
pub mod gemini_chat_gateway;

pub use connector::GeminiConnector;
pub use gemini_chat_gateway::GeminiChatGateway;
