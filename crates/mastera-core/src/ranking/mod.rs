//! Ranking rules
//!
//! Pure, storage-agnostic pieces of the ranking engine:
//! - `query`: filter/order descriptions handed to `WorkRepository`
//! - `section`: the static section → rule lookup table
//! - `pagination`: page math and limit clamping
//! - `quick_picks`: two-phase homepage curation merge
//! - `scoring`: trending score strategies

mod pagination;
mod query;
mod quick_picks;
mod scoring;
mod section;

pub use pagination::{Page, PageInfo, PageRequest, DEFAULT_MAX_LIMIT};
pub use query::{SortDirection, SortField, SortKey, WorkFilter, WorkOrder};
pub use quick_picks::{merge_quick_picks, quick_pick_shortfall};
pub use scoring::{rank_by_score, trending_score, ScoredWork, ScoringStrategy, WeightedTrendingScore};
pub use section::{Section, SectionRule};
