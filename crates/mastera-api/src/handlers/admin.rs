//! Admin curation handlers

use axum::extract::State;
use mastera_service::{CurationService, UpdateQuickPickRequest, WorkResponse};

use crate::extractors::{AuthUser, ValidatedJson, WorkIdPath};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Set or clear a work's quick-pick flag
///
/// PATCH /admin/works/{work_id}/quick-pick
pub async fn update_quick_pick(
    State(state): State<AppState>,
    auth: AuthUser,
    WorkIdPath(work_id): WorkIdPath,
    ValidatedJson(body): ValidatedJson<UpdateQuickPickRequest>,
) -> ApiResult<ApiJson<WorkResponse>> {
    let service = CurationService::new(state.service_context());
    let response = service
        .set_quick_pick(auth.role.as_deref(), work_id, body)
        .await?;
    Ok(ApiJson(response))
}
