//! Kasir Types - Pure record definitions
//!
//! This crate contains only plain data types with no async runtime
//! dependencies, shared by the storage ports and the HTTP server.

pub mod category;
pub mod de;
pub mod product;

pub use category::*;
pub use product::*;

/// Identifier type shared by every record.
pub type RecordId = i64;

/// Common surface of every stored record.
pub trait Record: Clone + Send + Sync + 'static {
    /// Name used in not-found and bad-id messages.
    const ENTITY: &'static str;

    fn id(&self) -> RecordId;
}

impl Record for Product {
    const ENTITY: &'static str = "Produk";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Category {
    const ENTITY: &'static str = "Category";

    fn id(&self) -> RecordId {
        self.id
    }
}
