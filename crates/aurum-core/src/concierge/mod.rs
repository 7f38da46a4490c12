//! Concierge domain module.
//!
//! - `message`: Transcript types (`ChatTurn`, `TurnRole`, `ChatTranscript`)
//! - `gateway`: Chat session seams (`ChatGateway`, `ChatConnector`)
//! - `persona`: Aurelia's greeting, fallbacks and system instruction

mod gateway;
mod message;
pub mod persona;

pub use gateway::{ChatConnector, ChatGateway};
pub use message::{ChatTranscript, ChatTurn, TurnRole};
