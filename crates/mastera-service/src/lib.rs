//! # mastera-service
//!
//! Application layer: reaction, ranking and curation use cases plus the DTOs
//! they exchange with the HTTP layer.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    CurationService, RankingService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
