//! Work entity <-> model mapper

use mastera_core::{parse_tags, DomainError, UserId, Work, WorkId, WorkStatus};
use uuid::Uuid;

use crate::models::WorkModel;

/// Convert WorkModel to Work entity
impl TryFrom<WorkModel> for Work {
    type Error = DomainError;

    fn try_from(model: WorkModel) -> Result<Self, Self::Error> {
        let status = WorkStatus::parse(&model.status).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown work status '{}'", model.status))
        })?;
        let owner_user_id = UserId::new(model.owner_user_id)
            .map_err(|e| DomainError::DatabaseError(format!("work {}: {e}", model.id)))?;

        Ok(Work {
            id: WorkId::from_uuid(model.id),
            title: model.title,
            description: model.description,
            category: model.category,
            language: model.language,
            tags: parse_tags(&model.tags),
            file_url: model.file_url,
            thumbnail_url: model.thumbnail_url,
            duration_seconds: model.duration_seconds,
            status,
            views: model.views,
            downloads: model.downloads,
            rating: model.rating,
            review_count: model.review_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
            owner_user_id,
            quick_pick: model.quick_pick,
            quick_pick_order: model.quick_pick_order,
        })
    }
}

/// Work entity columns that need conversion before binding
pub struct WorkInsert<'a> {
    pub id: Uuid,
    pub tags: String,
    pub status: &'static str,
    pub owner_user_id: &'a str,
}

impl<'a> WorkInsert<'a> {
    pub fn new(work: &'a Work) -> Self {
        Self {
            id: work.id.into_inner(),
            tags: work.tags_csv(),
            status: work.status.as_str(),
            owner_user_id: work.owner_user_id.as_str(),
        }
    }
}
