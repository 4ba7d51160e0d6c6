//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain types to response DTOs.

use mastera_core::{Page, PageInfo, ReactionState, ScoredWork, Work};

use super::responses::{
    PaginatedResponse, PaginationMeta, ReactionStateResponse, TrendingWorkResponse, WorkResponse,
};

impl From<&Work> for WorkResponse {
    fn from(work: &Work) -> Self {
        Self {
            id: work.id.to_string(),
            title: work.title.clone(),
            description: work.description.clone(),
            category: work.category.clone(),
            language: work.language.clone(),
            tags: work.tags_csv(),
            file_url: work.file_url.clone(),
            thumbnail_url: work.thumbnail_url.clone(),
            duration_seconds: work.duration_seconds,
            status: work.status.as_str().to_string(),
            views: work.views,
            downloads: work.downloads,
            rating: work.rating,
            review_count: work.review_count,
            created_at: work.created_at,
            updated_at: work.updated_at,
            owner_user_id: work.owner_user_id.to_string(),
            quick_pick: work.quick_pick,
            quick_pick_order: work.quick_pick_order,
        }
    }
}

impl From<Work> for WorkResponse {
    fn from(work: Work) -> Self {
        Self::from(&work)
    }
}

impl From<ScoredWork> for TrendingWorkResponse {
    fn from(scored: ScoredWork) -> Self {
        Self {
            work: WorkResponse::from(&scored.work),
            trending_score: scored.score,
        }
    }
}

impl From<ReactionState> for ReactionStateResponse {
    fn from(state: ReactionState) -> Self {
        Self {
            reaction: state.reaction,
            likes_count: state.counts.likes,
            dislikes_count: state.counts.dislikes,
        }
    }
}

impl From<PageInfo> for PaginationMeta {
    fn from(info: PageInfo) -> Self {
        Self {
            page: info.page,
            limit: info.limit,
            total: info.total,
            total_pages: info.total_pages,
        }
    }
}

impl<T, U: From<T>> From<Page<T>> for PaginatedResponse<U> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items.into_iter().map(U::from).collect(),
            pagination: page.pagination.into(),
        }
    }
}
