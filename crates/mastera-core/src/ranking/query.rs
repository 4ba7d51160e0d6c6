//! Work query descriptions
//!
//! `WorkFilter` and `WorkOrder` describe a listing without binding it to a
//! storage engine. The PostgreSQL repository renders them to SQL; the
//! in-memory repository evaluates them directly with `matches`/`compare`,
//! and both must agree.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::entities::{Work, WorkStatus};

/// Conjunction of equality/range predicates over works
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkFilter {
    pub status: Option<WorkStatus>,
    pub category: Option<String>,
    pub language: Option<String>,
    /// Inclusive lower bound on `created_at`
    pub created_since: Option<DateTime<Utc>>,
    pub quick_pick: Option<bool>,
    /// `Some(true)` = order IS NOT NULL, `Some(false)` = order IS NULL
    pub has_quick_pick_order: Option<bool>,
}

impl WorkFilter {
    /// Filter matching every published work
    pub fn published() -> Self {
        Self {
            status: Some(WorkStatus::Published),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn created_since(mut self, since: DateTime<Utc>) -> Self {
        self.created_since = Some(since);
        self
    }

    /// Restrict to quick picks with (or without) an explicit order
    pub fn quick_picks(mut self, ordered: bool) -> Self {
        self.quick_pick = Some(true);
        self.has_quick_pick_order = Some(ordered);
        self
    }

    /// Evaluate the filter against a single work
    pub fn matches(&self, work: &Work) -> bool {
        if self.status.is_some_and(|s| work.status != s) {
            return false;
        }
        if let Some(category) = &self.category {
            if work.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if work.language.as_deref() != Some(language.as_str()) {
                return false;
            }
        }
        if self.created_since.is_some_and(|since| work.created_at < since) {
            return false;
        }
        if self.quick_pick.is_some_and(|q| work.quick_pick != q) {
            return false;
        }
        if self
            .has_quick_pick_order
            .is_some_and(|ordered| work.quick_pick_order.is_some() != ordered)
        {
            return false;
        }
        true
    }
}

/// Sortable work attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Views,
    Downloads,
    CreatedAt,
    QuickPickOrder,
}

impl SortKey {
    /// Backing column name
    pub fn column(&self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::Downloads => "downloads",
            Self::CreatedAt => "created_at",
            Self::QuickPickOrder => "quick_pick_order",
        }
    }

    fn compare(self, a: &Work, b: &Work) -> Ordering {
        match self {
            Self::Views => a.views.cmp(&b.views),
            Self::Downloads => a.downloads.cmp(&b.downloads),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::QuickPickOrder => a.quick_pick_order.cmp(&b.quick_pick_order),
        }
    }

    fn is_null(self, work: &Work) -> bool {
        matches!(self, Self::QuickPickOrder) && work.quick_pick_order.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One ORDER BY term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortField {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortField {
    pub const fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// Ordered list of sort terms.
///
/// Nulls always sort last, and ties after the last term break on work id
/// ascending so that pagination is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrder {
    fields: Vec<SortField>,
}

impl WorkOrder {
    pub fn new(fields: impl Into<Vec<SortField>>) -> Self {
        Self {
            fields: fields.into(),
        }
    }

    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    /// Compare two works under this order (including the id tiebreak)
    pub fn compare(&self, a: &Work, b: &Work) -> Ordering {
        for field in &self.fields {
            let ordering = match (field.key.is_null(a), field.key.is_null(b)) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let natural = field.key.compare(a, b);
                    match field.direction {
                        SortDirection::Asc => natural,
                        SortDirection::Desc => natural.reverse(),
                    }
                }
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        a.id.cmp(&b.id)
    }
}
