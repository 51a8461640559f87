//! HTTP handlers

pub mod categories;
pub mod fallback;
pub mod health;
pub mod products;

pub use health::health;

use serde::Serialize;

/// Acknowledgement body for successful deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
