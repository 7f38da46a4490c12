//! Cart domain module.

mod model;

pub use model::{Cart, CartEntry};
