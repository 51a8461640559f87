//! Storage layer
//!
//! Two interchangeable backends behind the `ProductStore` / `CategoryStore`
//! ports: a process-local store and SQLite (embedded) via sqlx.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryStore;
