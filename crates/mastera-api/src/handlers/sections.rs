//! Section listing handlers

use axum::extract::{Path, State};
use mastera_service::{PaginatedResponse, RankingService, SectionQuery, WorkResponse};

use crate::extractors::{PageParams, SectionFilters};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// List one page of a named section
///
/// GET /sections/{section_id}?category=&language=&page=&limit=
pub async fn list_section(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
    filters: SectionFilters,
    page: PageParams,
) -> ApiResult<ApiJson<PaginatedResponse<WorkResponse>>> {
    let query = SectionQuery::new(filters.category, filters.language).with_page(page.page, page.limit);

    let service = RankingService::new(state.service_context());
    let response = service.list_section(&section_id, query).await?;
    Ok(ApiJson(response))
}
