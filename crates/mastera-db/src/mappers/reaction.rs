//! Reaction entity <-> model mapper

use mastera_core::{
    DomainError, EngagementCounts, Reaction, ReactionKind, UserId, WorkId,
};

use crate::models::{ReactionCountModel, ReactionModel};

/// Convert ReactionModel to Reaction entity
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind = ReactionKind::parse(&model.kind).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown reaction kind '{}'", model.kind))
        })?;
        let user_id = UserId::new(model.user_id)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(Reaction {
            user_id,
            work_id: WorkId::from_uuid(model.work_id),
            kind,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<ReactionCountModel> for EngagementCounts {
    fn from(model: ReactionCountModel) -> Self {
        EngagementCounts::new(model.likes, model.dislikes)
    }
}
