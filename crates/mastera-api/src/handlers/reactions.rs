//! Reaction handlers
//!
//! Endpoints for liking and disliking works.

use axum::extract::State;
use mastera_service::{ReactionService, ReactionStateResponse, SetReactionRequest};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson, WorkIdPath};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Set the caller's reaction
///
/// POST /works/{work_id}/reactions
pub async fn set_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    WorkIdPath(work_id): WorkIdPath,
    ValidatedJson(body): ValidatedJson<SetReactionRequest>,
) -> ApiResult<ApiJson<ReactionStateResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service
        .set_reaction(&auth.user_id, work_id, &body.action)
        .await?;
    Ok(ApiJson(response))
}

/// Get reaction counts and, when authenticated, the caller's own reaction
///
/// GET /works/{work_id}/reactions
pub async fn get_reaction_state(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    WorkIdPath(work_id): WorkIdPath,
) -> ApiResult<ApiJson<ReactionStateResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.get_reaction_state(auth.user_id(), work_id).await?;
    Ok(ApiJson(response))
}
