//! JSON replies for requests no handler claims

use crate::error::ApiError;
use crate::extractors::id::invalid_id;
use kasir_core::Record;

/// Unknown path.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Item path with an empty id segment (`/api/produk/`).
pub async fn empty_id<T: Record>() -> ApiError {
    invalid_id::<T>()
}
