//! Test fixtures and data generators
//!
//! Provides reusable test data and response shapes for integration tests.

use chrono::{Duration, Utc};
use mastera_core::{UserId, Work, WorkId};
use serde::{Deserialize, Serialize};

/// A published work with a unique id
pub fn published_work(title: &str) -> Work {
    let mut work = Work::new(
        WorkId::new(),
        UserId::new("creator").expect("valid user id"),
        title.to_string(),
        format!("media://{title}"),
    );
    work.publish();
    work
}

/// A published work with view count and age in days
pub fn work_with(title: &str, views: i64, age_days: i64) -> Work {
    let mut work = published_work(title);
    work.views = views;
    work.created_at = Utc::now() - Duration::days(age_days);
    work
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SetReactionRequest {
    pub action: String,
}

impl SetReactionRequest {
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuickPickRequest {
    pub quick_pick: bool,
    pub quick_pick_order: Option<i32>,
}

// ============================================================================
// Responses
// ============================================================================

/// Response envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionState {
    pub reaction: Option<String>,
    pub likes_count: i64,
    pub dislikes_count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkBody {
    pub id: String,
    pub title: String,
    pub tags: String,
    pub views: i64,
    pub quick_pick: bool,
    pub quick_pick_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingWorkBody {
    pub title: String,
    pub trending_score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBody<T> {
    pub items: Vec<T>,
    pub pagination: PaginationBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBody {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: i64,
}

pub fn titles(works: &[WorkBody]) -> Vec<&str> {
    works.iter().map(|w| w.title.as_str()).collect()
}
