//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Reaction Requests
// ============================================================================

/// Set reaction request
///
/// `action` is decoded by the service so unknown values fail before any
/// storage access.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetReactionRequest {
    #[validate(length(min = 1, max = 16, message = "Action must be 1-16 characters"))]
    pub action: String,
}

// ============================================================================
// Ranking Requests
// ============================================================================

/// Section listing parameters
///
/// Empty strings are treated as absent filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionQuery {
    pub category: Option<String>,
    pub language: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl SectionQuery {
    pub fn new(category: Option<String>, language: Option<String>) -> Self {
        Self {
            category: non_empty(category),
            language: non_empty(language),
            page: None,
            limit: None,
        }
    }

    pub fn with_page(mut self, page: Option<u32>, limit: Option<u32>) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Curation Requests
// ============================================================================

/// Update homepage quick-pick flags
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuickPickRequest {
    pub quick_pick: bool,

    #[serde(default)]
    #[validate(range(min = 0, message = "Quick pick order must be non-negative"))]
    pub quick_pick_order: Option<i32>,
}
