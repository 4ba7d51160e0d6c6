//! Work database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the works table
#[derive(Debug, Clone, FromRow)]
pub struct WorkModel {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    /// Comma-separated
    pub tags: String,
    pub file_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: Option<i32>,
    pub status: String,
    pub views: i64,
    pub downloads: i64,
    pub rating: f64,
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_user_id: String,
    pub quick_pick: bool,
    pub quick_pick_order: Option<i32>,
}
