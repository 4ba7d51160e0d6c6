//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` for the duration of a
//! request and orchestrates repository calls around the domain rules.

pub mod context;
pub mod curation;
pub mod error;
pub mod ranking;
pub mod reaction;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use curation::CurationService;
pub use error::{ServiceError, ServiceResult};
pub use ranking::RankingService;
pub use reaction::ReactionService;
