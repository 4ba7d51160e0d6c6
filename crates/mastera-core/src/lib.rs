//! # mastera-core
//!
//! Domain layer containing works, reactions, ranking rules, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod ranking;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    parse_tags, EngagementCounts, Reaction, ReactionAction, ReactionKind, ReactionState, Work,
    WorkStatus,
};
pub use error::DomainError;
pub use ranking::{
    merge_quick_picks, quick_pick_shortfall, rank_by_score, trending_score, Page, PageInfo,
    PageRequest, ScoredWork, ScoringStrategy, Section, SectionRule, SortDirection, SortField,
    SortKey, WeightedTrendingScore, WorkFilter, WorkOrder, DEFAULT_MAX_LIMIT,
};
pub use traits::{ReactionRepository, RepoResult, WorkRepository};
pub use value_objects::{IdParseError, UserId, WorkId};
