//! JSON body extractor
//!
//! Decodes the first JSON value in the body regardless of the declared
//! content type; anything after it is ignored. Any failure becomes
//! `400 Invalid request`.

use crate::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::invalid_request())?;

        match serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<T>()
            .next()
        {
            Some(Ok(value)) => Ok(JsonBody(value)),
            Some(Err(e)) => {
                tracing::debug!("Rejected request body: {}", e);
                Err(ApiError::invalid_request())
            }
            None => {
                tracing::debug!("Rejected empty request body");
                Err(ApiError::invalid_request())
            }
        }
    }
}
