//! Work entity - a published or draft piece of uploaded content

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{UserId, WorkId};

/// Publication status of a work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    #[default]
    Draft,
    Published,
}

impl WorkStatus {
    /// Storage / wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    /// Parse from storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            _ => None,
        }
    }
}

/// Work entity
#[derive(Debug, Clone, PartialEq)]
pub struct Work {
    pub id: WorkId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub tags: Vec<String>,
    /// Opaque media reference owned by the media platform
    pub file_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: Option<i32>,
    pub status: WorkStatus,
    pub views: i64,
    pub downloads: i64,
    /// Average review rating
    pub rating: f64,
    /// Number of reviews behind `rating`
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_user_id: UserId,
    pub quick_pick: bool,
    /// Explicit homepage rank; only meaningful while `quick_pick` is set
    pub quick_pick_order: Option<i32>,
}

impl Work {
    /// Create a new draft Work with zeroed counters
    pub fn new(id: WorkId, owner_user_id: UserId, title: String, file_url: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: None,
            category: None,
            language: None,
            tags: Vec::new(),
            file_url,
            thumbnail_url: None,
            duration_seconds: None,
            status: WorkStatus::Draft,
            views: 0,
            downloads: 0,
            rating: 0.0,
            review_count: 0,
            created_at: now,
            updated_at: now,
            owner_user_id,
            quick_pick: false,
            quick_pick_order: None,
        }
    }

    /// Check if the work is visible in public listings
    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == WorkStatus::Published
    }

    /// Mark the work as published
    pub fn publish(&mut self) {
        self.status = WorkStatus::Published;
        self.updated_at = Utc::now();
    }

    /// Update homepage curation flags.
    ///
    /// An order without the flag is rejected; clearing the flag clears the order.
    pub fn set_quick_pick(&mut self, quick_pick: bool, order: Option<i32>) -> Result<(), DomainError> {
        match (quick_pick, order) {
            (false, Some(_)) => {
                return Err(DomainError::ValidationError(
                    "quick pick order requires quick pick to be enabled".to_string(),
                ))
            }
            (_, Some(o)) if o < 0 => return Err(DomainError::InvalidQuickPickOrder(o)),
            _ => {}
        }

        self.quick_pick = quick_pick;
        self.quick_pick_order = if quick_pick { order } else { None };
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Tags joined as they cross the interface boundary
    pub fn tags_csv(&self) -> String {
        self.tags.join(",")
    }
}

/// Split a comma-separated tag string, trimming whitespace and dropping empties
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
