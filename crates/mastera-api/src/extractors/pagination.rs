//! Query parameter extractors
//!
//! Page and limit are parsed leniently: anything non-numeric is treated as
//! absent so the section default applies. Range clamping happens in the
//! ranking layer.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw page/limit query parameters
#[derive(Debug, Default, Deserialize)]
struct RawPageParams {
    #[serde(default)]
    page: Option<String>,
    #[serde(default)]
    limit: Option<String>,
}

/// Parsed `page` and `limit` query parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<RawPageParams> for PageParams {
    fn from(raw: RawPageParams) -> Self {
        Self {
            page: parse_count(raw.page.as_deref()),
            limit: parse_count(raw.limit.as_deref()),
        }
    }
}

/// Negative values saturate to 0, non-numeric values are dropped
fn parse_count(raw: Option<&str>) -> Option<u32> {
    let value = raw?.trim().parse::<i64>().ok()?;
    Some(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}

#[async_trait]
impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(raw.into())
    }
}

/// Optional `category` / `language` filters for section listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionFilters {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for SectionFilters
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(filters) = Query::<SectionFilters>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(filters)
    }
}
