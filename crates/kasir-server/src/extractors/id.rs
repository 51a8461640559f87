//! Path id extractor for `/{resource}/:id` routes

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use kasir_core::{Record, RecordId};
use std::marker::PhantomData;

/// Positive decimal id taken from the last path segment.
///
/// Rejected before any store access when the segment is not a number or is
/// zero or negative.
#[derive(Debug)]
pub struct ItemId<T>(pub RecordId, pub PhantomData<fn() -> T>);

/// Rejection for a missing or malformed `T` id.
pub fn invalid_id<T: Record>() -> ApiError {
    ApiError::BadRequest(format!("Invalid {} ID", T::ENTITY))
}

/// Parse a path segment into a record id. Only positive integers qualify.
pub fn parse_id(raw: &str) -> Option<RecordId> {
    raw.parse::<RecordId>().ok().filter(|id| *id > 0)
}

#[async_trait]
impl<S, T> FromRequestParts<S> for ItemId<T>
where
    S: Send + Sync,
    T: Record,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id::<T>())?;

        match parse_id(&raw) {
            Some(id) => Ok(ItemId(id, PhantomData)),
            None => {
                tracing::debug!("Rejected {} id {:?}", T::ENTITY, raw);
                Err(invalid_id::<T>())
            }
        }
    }
}
