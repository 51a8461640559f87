//! Error types for Kasir

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KasirError>;

#[derive(Error, Debug)]
pub enum KasirError {
    /// No record with the given id exists in the backing store.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(String),
}

impl KasirError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        KasirError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KasirError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct_from_database() {
        let missing = KasirError::not_found("Category", 4);
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "Category not found: 4");

        let failed = KasirError::Database("disk I/O error".to_string());
        assert!(!failed.is_not_found());
    }
}
