//! Reaction service
//!
//! Sets and reads a user's like/dislike on a work. Counts are recounted from
//! the reaction rows on every call, never cached.

use mastera_core::{DomainError, ReactionAction, ReactionState, UserId, Work, WorkId};
use tracing::{info, instrument};

use crate::dto::ReactionStateResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply `like`, `unlike`, `dislike` or `undislike` for the user.
    ///
    /// The action is decoded before storage is touched, so an unknown action
    /// never mutates anything. Removals only delete a reaction of the matching
    /// kind; anything else is a no-op.
    #[instrument(skip(self))]
    pub async fn set_reaction(
        &self,
        user_id: &UserId,
        work_id: WorkId,
        action: &str,
    ) -> ServiceResult<ReactionStateResponse> {
        let action: ReactionAction = action.parse()?;

        self.require_work(work_id).await?;

        let repo = self.ctx.reaction_repo();
        if action.is_removal() {
            repo.delete(user_id, work_id, action.kind()).await?;
        } else {
            repo.upsert(user_id, work_id, action.kind()).await?;
        }

        let state = self.load_state(Some(user_id), work_id).await?;

        info!(
            work_id = %work_id,
            user_id = %user_id,
            action = %action,
            likes = state.counts.likes,
            dislikes = state.counts.dislikes,
            "Reaction set"
        );

        Ok(state.into())
    }

    /// Read the caller's reaction and the work's totals.
    ///
    /// Anonymous callers always see `reaction = None`.
    #[instrument(skip(self))]
    pub async fn get_reaction_state(
        &self,
        user_id: Option<&UserId>,
        work_id: WorkId,
    ) -> ServiceResult<ReactionStateResponse> {
        self.require_work(work_id).await?;
        Ok(self.load_state(user_id, work_id).await?.into())
    }

    async fn require_work(&self, work_id: WorkId) -> ServiceResult<Work> {
        self.ctx
            .work_repo()
            .find_by_id(work_id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::WorkNotFound(work_id)))
    }

    async fn load_state(
        &self,
        user_id: Option<&UserId>,
        work_id: WorkId,
    ) -> ServiceResult<ReactionState> {
        let repo = self.ctx.reaction_repo();

        let reaction = match user_id {
            Some(user_id) => repo.find(user_id, work_id).await?.map(|r| r.kind),
            None => None,
        };
        let counts = repo.count_by_kind(work_id).await?;

        Ok(ReactionState::new(reaction, counts))
    }
}
