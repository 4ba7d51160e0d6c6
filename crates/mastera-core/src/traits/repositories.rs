//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; `mastera-db` provides the
//! PostgreSQL and in-memory implementations.

use async_trait::async_trait;

use crate::entities::{EngagementCounts, Reaction, ReactionKind, Work};
use crate::error::DomainError;
use crate::ranking::{WorkFilter, WorkOrder};
use crate::value_objects::{UserId, WorkId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Work Repository
// ============================================================================

#[async_trait]
pub trait WorkRepository: Send + Sync {
    /// Find work by ID
    async fn find_by_id(&self, id: WorkId) -> RepoResult<Option<Work>>;

    /// Count works matching a filter
    async fn count(&self, filter: &WorkFilter) -> RepoResult<i64>;

    /// List works matching a filter, sorted and windowed
    async fn find_many(
        &self,
        filter: &WorkFilter,
        order: &WorkOrder,
        skip: i64,
        take: i64,
    ) -> RepoResult<Vec<Work>>;

    /// Insert a new work
    async fn create(&self, work: &Work) -> RepoResult<()>;

    /// Set quick-pick flag and order, returning the updated work.
    ///
    /// Fails with `WorkNotFound` if the work does not exist.
    async fn update_quick_pick(
        &self,
        id: WorkId,
        quick_pick: bool,
        order: Option<i32>,
    ) -> RepoResult<Work>;

    /// Verify the backing store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// At most one reaction row exists per (user, work); its `kind` says which.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Current reaction of a user on a work
    async fn find(&self, user_id: &UserId, work_id: WorkId) -> RepoResult<Option<Reaction>>;

    /// Atomically set the user's reaction to `kind`, replacing the opposite one
    async fn upsert(
        &self,
        user_id: &UserId,
        work_id: WorkId,
        kind: ReactionKind,
    ) -> RepoResult<Reaction>;

    /// Remove the user's reaction only if it is of `kind`.
    ///
    /// Returns whether a row was removed.
    async fn delete(&self, user_id: &UserId, work_id: WorkId, kind: ReactionKind)
        -> RepoResult<bool>;

    /// Live like/dislike totals for a work
    async fn count_by_kind(&self, work_id: WorkId) -> RepoResult<EngagementCounts>;
}
