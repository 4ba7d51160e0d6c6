//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers::{admin, health, reactions, sections, works};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(work_routes())
        .merge(section_routes())
        .merge(admin_routes())
}

/// Work feeds and reactions
fn work_routes() -> Router<AppState> {
    Router::new()
        .route("/works/quick-picks", get(works::quick_picks))
        .route("/works/trending", get(works::trending))
        .route(
            "/works/:work_id/reactions",
            get(reactions::get_reaction_state).post(reactions::set_reaction),
        )
}

/// Section listings
fn section_routes() -> Router<AppState> {
    Router::new().route("/sections/:section_id", get(sections::list_section))
}

/// Curation routes (admin role required)
fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/admin/works/:work_id/quick-pick",
        patch(admin::update_quick_pick),
    )
}
