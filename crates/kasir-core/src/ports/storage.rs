//! Storage traits for persistence
//!
//! Both the in-memory backend and the SQL backend implement these, so the
//! HTTP layer never knows which one is wired in.

use crate::Result;
use async_trait::async_trait;
use kasir_types::{Category, CategoryPayload, Product, ProductPayload, RecordId};

/// Product store
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in insertion order.
    async fn list_products(&self) -> Result<Vec<Product>>;
    /// Store a new product; the backend assigns the id.
    async fn create_product(&self, payload: ProductPayload) -> Result<Product>;
    async fn get_product(&self, id: RecordId) -> Result<Product>;
    /// Replace every field of an existing product, keeping its id.
    async fn update_product(&self, id: RecordId, payload: ProductPayload) -> Result<Product>;
    async fn delete_product(&self, id: RecordId) -> Result<()>;
}

/// Category store
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn create_category(&self, payload: CategoryPayload) -> Result<Category>;
    async fn get_category(&self, id: RecordId) -> Result<Category>;
    async fn update_category(&self, id: RecordId, payload: CategoryPayload) -> Result<Category>;
    async fn delete_category(&self, id: RecordId) -> Result<()>;
}
