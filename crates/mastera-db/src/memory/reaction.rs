//! In-memory implementation of ReactionRepository
//!
//! Rows live in a `DashMap` keyed by (user, work). Every mutation runs under
//! that key's shard lock, which gives the same single-row atomicity as the
//! PostgreSQL upsert.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::instrument;

use mastera_core::{
    EngagementCounts, Reaction, ReactionKind, ReactionRepository, RepoResult, UserId, WorkId,
};

type ReactionKey = (UserId, WorkId);

#[derive(Debug, Default)]
pub struct InMemoryReactionRepository {
    reactions: DashMap<ReactionKey, Reaction>,
}

impl InMemoryReactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rows across all works
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: &UserId, work_id: WorkId) -> RepoResult<Option<Reaction>> {
        Ok(self
            .reactions
            .get(&(user_id.clone(), work_id))
            .map(|r| r.value().clone()))
    }

    #[instrument(skip(self))]
    async fn upsert(
        &self,
        user_id: &UserId,
        work_id: WorkId,
        kind: ReactionKind,
    ) -> RepoResult<Reaction> {
        let reaction = match self.reactions.entry((user_id.clone(), work_id)) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().set_kind(kind);
                entry.get().clone()
            }
            Entry::Vacant(entry) => entry
                .insert(Reaction::new(user_id.clone(), work_id, kind))
                .value()
                .clone(),
        };
        Ok(reaction)
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        user_id: &UserId,
        work_id: WorkId,
        kind: ReactionKind,
    ) -> RepoResult<bool> {
        Ok(self
            .reactions
            .remove_if(&(user_id.clone(), work_id), |_, r| r.kind == kind)
            .is_some())
    }

    #[instrument(skip(self))]
    async fn count_by_kind(&self, work_id: WorkId) -> RepoResult<EngagementCounts> {
        let mut counts = EngagementCounts::default();
        for entry in self.reactions.iter().filter(|e| e.key().1 == work_id) {
            match entry.value().kind {
                ReactionKind::Like => counts.likes += 1,
                ReactionKind::Dislike => counts.dislikes += 1,
            }
        }
        Ok(counts)
    }
}
