//! Homepage work feeds

use axum::extract::State;
use mastera_service::{RankingService, TrendingWorkResponse, WorkResponse};

use crate::extractors::PageParams;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Curated homepage picks
///
/// GET /works/quick-picks?limit=
pub async fn quick_picks(
    State(state): State<AppState>,
    params: PageParams,
) -> ApiResult<ApiJson<Vec<WorkResponse>>> {
    let service = RankingService::new(state.service_context());
    let response = service.homepage_quick_picks(params.limit).await?;
    Ok(ApiJson(response))
}

/// Works ranked by trending score
///
/// GET /works/trending?limit=
pub async fn trending(
    State(state): State<AppState>,
    params: PageParams,
) -> ApiResult<ApiJson<Vec<TrendingWorkResponse>>> {
    let service = RankingService::new(state.service_context());
    let response = service.trending_works(params.limit).await?;
    Ok(ApiJson(response))
}
