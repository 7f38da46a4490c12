//! Application layer for the Aurum storefront.
//!
//! Use cases that coordinate the domain state with the remote gateways:
//! the shop session (catalog, cart, configurator, admin) and the concierge chat.

pub mod concierge_service;
pub mod retry;
pub mod shop_usecase;

pub use concierge_service::{ConciergeService, SendOutcome, SendRejection};
pub use shop_usecase::ShopUseCase;
