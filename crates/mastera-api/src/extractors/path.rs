//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use mastera_core::WorkId;

use crate::response::ApiError;

/// A `:work_id` path segment parsed as a UUID
#[derive(Debug, Clone, Copy)]
pub struct WorkIdPath(pub WorkId);

#[async_trait]
impl<S> FromRequestParts<S> for WorkIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        WorkId::parse(&raw)
            .map(WorkIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid work_id format"))
    }
}
