//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and query parameters.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use pagination::{PageParams, SectionFilters};
pub use path::WorkIdPath;
pub use validated::ValidatedJson;
