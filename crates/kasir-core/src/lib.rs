//! Kasir Core Library
//!
//! Domain error type and the storage ports every backend implements.

// Re-export record types from kasir-types
pub use kasir_types::*;

pub mod error;
pub mod ports;

pub use error::{KasirError, Result};
pub use ports::{CategoryStore, ProductStore};
