//! Reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the work_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: String,
    pub work_id: Uuid,
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated like/dislike counts (from query)
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ReactionCountModel {
    pub likes: i64,
    pub dislikes: i64,
}
