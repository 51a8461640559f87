//! SQLite database layer (embedded, no external dependencies)
//!
//! Every value reaches SQLite as a bound parameter. A lookup that finds no
//! row, and an UPDATE/DELETE that touches zero rows, both surface as
//! `KasirError::NotFound`; anything else the driver reports is a generic
//! `KasirError::Database`.

use anyhow::Context;
use async_trait::async_trait;
use kasir_core::{
    Category, CategoryPayload, CategoryStore, KasirError, Product, ProductPayload, ProductStore,
    Record, RecordId, Result,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str) -> anyhow::Result<Self> {
        if database_path == ":memory:" {
            tracing::warn!("Using a transient in-memory SQLite database");
            return Self::in_memory().await;
        }

        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        Self::from_pool(pool).await
    }

    /// Private database that lives as long as the returned handle.
    ///
    /// Each connection to `:memory:` sees its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid in-memory SQLite options")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> anyhow::Result<Self> {
        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> sqlx::Result<()> {
        // Categories table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Products table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL DEFAULT '',
                price INTEGER NOT NULL DEFAULT 0,
                stock INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CategoryStore for Database {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, name, description FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create_category(&self, payload: CategoryPayload) -> Result<Category> {
        let (id,): (RecordId,) = sqlx::query_as(
            r#"
            INSERT INTO categories (name, description)
            VALUES (?1, ?2)
            RETURNING id
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .fetch_one(&*self.pool)
        .await
        .map_err(db_error)?;

        tracing::info!("Created category {}", id);
        Ok(Category::from_payload(id, payload))
    }

    async fn get_category(&self, id: RecordId) -> Result<Category> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, name, description FROM categories WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(db_error)?;

        row.map(Category::from)
            .ok_or_else(|| KasirError::not_found(Category::ENTITY, id))
    }

    async fn update_category(&self, id: RecordId, payload: CategoryPayload) -> Result<Category> {
        let result = sqlx::query(
            r#"
            UPDATE categories SET name = ?1, description = ?2 WHERE id = ?3
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(id)
        .execute(&*self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(KasirError::not_found(Category::ENTITY, id));
        }

        tracing::info!("Updated category {}", id);
        Ok(Category::from_payload(id, payload))
    }

    async fn delete_category(&self, id: RecordId) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(KasirError::not_found(Category::ENTITY, id));
        }

        tracing::info!("Deleted category {}", id);
        Ok(())
    }
}

#[async_trait]
impl ProductStore for Database {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, stock FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create_product(&self, payload: ProductPayload) -> Result<Product> {
        let (id,): (RecordId,) = sqlx::query_as(
            r#"
            INSERT INTO products (name, price, stock)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(payload.stock)
        .fetch_one(&*self.pool)
        .await
        .map_err(db_error)?;

        tracing::info!("Created product {}", id);
        Ok(Product::from_payload(id, payload))
    }

    async fn get_product(&self, id: RecordId) -> Result<Product> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, stock FROM products WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(db_error)?;

        row.map(Product::from)
            .ok_or_else(|| KasirError::not_found(Product::ENTITY, id))
    }

    async fn update_product(&self, id: RecordId, payload: ProductPayload) -> Result<Product> {
        let result = sqlx::query(
            r#"
            UPDATE products SET name = ?1, price = ?2, stock = ?3 WHERE id = ?4
            "#,
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(payload.stock)
        .bind(id)
        .execute(&*self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(KasirError::not_found(Product::ENTITY, id));
        }

        tracing::info!("Updated product {}", id);
        Ok(Product::from_payload(id, payload))
    }

    async fn delete_product(&self, id: RecordId) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM products WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(KasirError::not_found(Product::ENTITY, id));
        }

        tracing::info!("Deleted product {}", id);
        Ok(())
    }
}

fn db_error(e: sqlx::Error) -> KasirError {
    KasirError::Database(e.to_string())
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: String,
}

impl From<CategoryRow> for Category {
    fn from(r: CategoryRow) -> Self {
        Category {
            id: r.id,
            name: r.name,
            description: r.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: i64,
    stock: i64,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product {
            id: r.id,
            name: r.name,
            price: r.price,
            stock: r.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    async fn test_db() -> Database {
        Database::in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_table_lists_empty_vec() {
        let db = test_db().await;
        assert!(db.list_categories().await.unwrap().is_empty());
        assert!(db.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_populates_generated_id() {
        let db = test_db().await;

        let first = db
            .create_category(CategoryPayload::new("Skin Care", "Skin Care Products"))
            .await
            .unwrap();
        let second = db
            .create_category(CategoryPayload::new("Diapers", "Diapers products"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(db.get_category(2).await.unwrap(), second);
        assert_eq!(db.list_categories().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let db = test_db().await;
        let err = db.get_category(99).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_driver_failure_is_database_error() {
        let db = test_db().await;
        sqlx::query("DROP TABLE categories")
            .execute(&*db.pool)
            .await
            .unwrap();

        let err = db.get_category(1).await.unwrap_err();
        assert!(!err.is_not_found());
        assert!(matches!(err, KasirError::Database(_)));

        let err = db
            .create_category(CategoryPayload::new("Snacks", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, KasirError::Database(_)));
    }

    #[tokio::test]
    async fn test_zero_rows_affected_is_not_found() {
        let db = test_db().await;

        let err = db
            .update_category(7, CategoryPayload::new("Nope", ""))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = db.delete_category(7).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_then_delete_category() {
        let db = test_db().await;
        let created = db
            .create_category(CategoryPayload::new("Dry Care", "Dry Care Products"))
            .await
            .unwrap();

        let updated = db
            .update_category(created.id, CategoryPayload::new("Dry Goods", ""))
            .await
            .unwrap();
        assert_eq!(updated, Category::new(created.id, "Dry Goods", ""));
        assert_eq!(db.get_category(created.id).await.unwrap(), updated);

        assert_ok!(db.delete_category(created.id).await);
        assert!(db.delete_category(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_product_crud() {
        let db = test_db().await;

        let created = db
            .create_product(ProductPayload::new("Indomie Goreng", 3500, 10))
            .await
            .unwrap();
        assert_eq!(created, Product::new(1, "Indomie Goreng", 3500, 10));

        let updated = db
            .update_product(1, ProductPayload::new("Indomie Soto", 3600, 8))
            .await
            .unwrap();
        assert_eq!(db.get_product(1).await.unwrap(), updated);

        assert_ok!(db.delete_product(1).await);
        assert!(db.get_product(1).await.unwrap_err().is_not_found());
        assert!(db.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_autoincrement_does_not_reuse_ids() {
        let db = test_db().await;
        let first = db
            .create_product(ProductPayload::new("a", 1, 1))
            .await
            .unwrap();
        db.delete_product(first.id).await.unwrap();

        let second = db
            .create_product(ProductPayload::new("b", 2, 2))
            .await
            .unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_values_are_bound_not_interpolated() {
        let db = test_db().await;
        let sneaky = "x'); DROP TABLE categories; --";

        let created = db
            .create_category(CategoryPayload::new(sneaky, sneaky))
            .await
            .unwrap();
        assert_eq!(db.get_category(created.id).await.unwrap().name, sneaky);
    }
}
