//! Section rule table
//!
//! Each named homepage/browse section maps to a fixed filter window, an
//! ordering, and a default page size. Unknown section ids resolve to the
//! fallback rule (newest published first) instead of failing.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

use super::query::{SortField, SortKey, WorkFilter, WorkOrder};

const VIEWS_DESC: SortField = SortField::desc(SortKey::Views);
const CREATED_DESC: SortField = SortField::desc(SortKey::CreatedAt);

/// Named ranking view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Trending,
    FeaturedArtists,
    NewReleases,
    PopularThisWeek,
    Recommended,
    TopRated,
    RisingCreators,
    RecentlyViewed,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Self::Trending,
        Self::FeaturedArtists,
        Self::NewReleases,
        Self::PopularThisWeek,
        Self::Recommended,
        Self::TopRated,
        Self::RisingCreators,
        Self::RecentlyViewed,
    ];

    /// URL identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::FeaturedArtists => "featured-artists",
            Self::NewReleases => "new-releases",
            Self::PopularThisWeek => "popular-this-week",
            Self::Recommended => "recommended",
            Self::TopRated => "top-rated",
            Self::RisingCreators => "rising-creators",
            Self::RecentlyViewed => "recently-viewed",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Static rule for this section
    pub fn rule(self) -> SectionRule {
        match self {
            Self::Trending => SectionRule::new(None, &[VIEWS_DESC], 10),
            Self::FeaturedArtists => SectionRule::new(None, &[VIEWS_DESC, CREATED_DESC], 12),
            Self::NewReleases => SectionRule::new(None, &[CREATED_DESC], 24),
            Self::PopularThisWeek => SectionRule::new(Some(7), &[VIEWS_DESC], 10),
            // Same heuristic as featured-artists until per-user signals exist
            Self::Recommended => SectionRule::new(None, &[VIEWS_DESC, CREATED_DESC], 12),
            // Views stand in for rating
            Self::TopRated => SectionRule::new(None, &[VIEWS_DESC], 10),
            Self::RisingCreators => SectionRule::new(Some(30), &[VIEWS_DESC, CREATED_DESC], 12),
            // No per-user view history is wired in
            Self::RecentlyViewed => SectionRule::new(None, &[CREATED_DESC], 12),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Filter window, ordering and page size for one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRule {
    /// Only include works created within this many days
    pub window_days: Option<i64>,
    pub order: &'static [SortField],
    pub default_limit: u32,
}

impl SectionRule {
    /// Rule applied to unrecognized section ids
    pub const FALLBACK: SectionRule = SectionRule::new(None, &[CREATED_DESC], 20);

    const fn new(window_days: Option<i64>, order: &'static [SortField], default_limit: u32) -> Self {
        Self {
            window_days,
            order,
            default_limit,
        }
    }

    /// Look up a rule by section id, failing open to `FALLBACK`
    pub fn resolve(section_id: &str) -> Self {
        Section::from_id(section_id).map_or(Self::FALLBACK, Section::rule)
    }

    /// Build the published-works filter for this rule at `now`
    pub fn filter(
        &self,
        now: DateTime<Utc>,
        category: Option<String>,
        language: Option<String>,
    ) -> WorkFilter {
        let filter = WorkFilter::published()
            .with_category(category)
            .with_language(language);

        match self.window_days {
            Some(days) => filter.created_since(now - Duration::days(days)),
            None => filter,
        }
    }

    pub fn work_order(&self) -> WorkOrder {
        WorkOrder::new(self.order.to_vec())
    }
}
