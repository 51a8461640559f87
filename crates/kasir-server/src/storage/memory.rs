//! In-memory record store
//!
//! Records live in a `Vec` in insertion order. Ids come from a counter that
//! only moves forward, so an id is never handed out twice even after deletes.
//! The whole read-modify-write of each operation runs under one lock.

use async_trait::async_trait;
use kasir_core::{
    Category, CategoryPayload, CategoryStore, KasirError, Product, ProductPayload, ProductStore,
    Record, RecordId, Result,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

pub struct MemoryStore<T> {
    inner: RwLock<Inner<T>>,
}

struct Inner<T> {
    records: Vec<T>,
    next_id: RecordId,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from existing records; new ids continue after the largest one.
    pub fn with_records(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { records, next_id }),
        }
    }

    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.records.clone()
    }

    /// Assign the next id, build the record with it and append it.
    pub async fn insert_with(&self, build: impl FnOnce(RecordId) -> T) -> T {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let record = build(id);
        inner.records.push(record.clone());
        info!("Created {} {}", T::ENTITY, id);
        record
    }

    pub async fn get(&self, id: RecordId) -> Result<T> {
        debug!("Looking up {} {}", T::ENTITY, id);
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| KasirError::not_found(T::ENTITY, id))
    }

    /// Overwrite the record with `id` in place.
    pub async fn replace(&self, id: RecordId, record: T) -> Result<T> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| KasirError::not_found(T::ENTITY, id))?;

        *slot = record.clone();
        info!("Updated {} {}", T::ENTITY, id);
        Ok(record)
    }

    /// Remove the record with `id`, keeping the order of the rest.
    pub async fn remove(&self, id: RecordId) -> Result<T> {
        let mut inner = self.inner.write().await;
        let index = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| KasirError::not_found(T::ENTITY, id))?;

        info!("Deleted {} {}", T::ENTITY, id);
        Ok(inner.records.remove(index))
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryStore<Product> {
    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.list().await)
    }

    async fn create_product(&self, payload: ProductPayload) -> Result<Product> {
        Ok(self
            .insert_with(|id| Product::from_payload(id, payload))
            .await)
    }

    async fn get_product(&self, id: RecordId) -> Result<Product> {
        self.get(id).await
    }

    async fn update_product(&self, id: RecordId, payload: ProductPayload) -> Result<Product> {
        self.replace(id, Product::from_payload(id, payload)).await
    }

    async fn delete_product(&self, id: RecordId) -> Result<()> {
        self.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore<Category> {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.list().await)
    }

    async fn create_category(&self, payload: CategoryPayload) -> Result<Category> {
        Ok(self
            .insert_with(|id| Category::from_payload(id, payload))
            .await)
    }

    async fn get_category(&self, id: RecordId) -> Result<Category> {
        self.get(id).await
    }

    async fn update_category(&self, id: RecordId, payload: CategoryPayload) -> Result<Category> {
        self.replace(id, Category::from_payload(id, payload)).await
    }

    async fn delete_category(&self, id: RecordId) -> Result<()> {
        self.remove(id).await.map(|_| ())
    }
}

/// Products the register starts with when seeding is enabled.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Indomie Godog", 3500, 10),
        Product::new(2, "Vit 1000ml", 3000, 40),
        Product::new(3, "kecap", 12000, 20),
    ]
}

/// Categories the register starts with when seeding is enabled.
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Skin Care", "Skin Care Products"),
        Category::new(2, "Diapers", "Diapers products"),
        Category::new(3, "Dry Care", "Dry Care Products"),
    ]
}
