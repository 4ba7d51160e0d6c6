//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use mastera_common::{AppConfig, AppError, JwtService, StorageBackend};
use mastera_core::{ReactionRepository, WorkRepository};
use mastera_db::{
    create_pool, run_migrations, InMemoryReactionRepository, InMemoryWorkRepository,
    PgReactionRepository, PgWorkRepository,
};
use mastera_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged after the middleware so probes are never rate limited.
///
/// # Errors
/// Returns an error if the middleware configuration is invalid
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(router.merge(health_routes()).with_state(state))
}

/// Initialize storage for the configured backend and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let (work_repo, reaction_repo): (Arc<dyn WorkRepository>, Arc<dyn ReactionRepository>) =
        match config.storage.backend {
            StorageBackend::Memory => {
                warn!("Using in-memory storage; data is lost on restart");
                (
                    Arc::new(InMemoryWorkRepository::new()),
                    Arc::new(InMemoryReactionRepository::new()),
                )
            }
            StorageBackend::Postgres => {
                let database = config
                    .database
                    .as_ref()
                    .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

                info!("Connecting to PostgreSQL...");
                let db_config = mastera_db::DatabaseConfig::new(database.url.clone())
                    .with_pool_size(database.max_connections, database.min_connections);
                let pool = create_pool(&db_config)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("PostgreSQL connection established");

                if let Some(dir) = &database.migrations_dir {
                    run_migrations(&pool, dir)
                        .await
                        .map_err(|e| AppError::Database(e.to_string()))?;
                    info!(dir = %dir, "Migrations applied");
                }

                (
                    Arc::new(PgWorkRepository::new(pool.clone())),
                    Arc::new(PgReactionRepository::new(pool)),
                )
            }
        };

    build_app_state(config, work_repo, reaction_repo)
}

/// Assemble AppState around already constructed repositories
pub fn build_app_state(
    config: AppConfig,
    work_repo: Arc<dyn WorkRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.auth.jwt_secret));

    let service_context = ServiceContextBuilder::new()
        .work_repo(work_repo)
        .reaction_repo(reaction_repo)
        .ranking(config.ranking.clone())
        .jwt_service(jwt_service)
        .admin_role(config.auth.admin_role.clone())
        .build()
        .map_err(AppError::config)?;

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use std::collections::HashMap;
    use tower::ServiceExt;

    async fn memory_app() -> Router {
        let vars: HashMap<String, String> = [
            ("API_PORT", "0"),
            ("STORAGE_BACKEND", "memory"),
            ("AUTH_JWT_SECRET", "router-test-secret"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = AppConfig::from_map(&vars).unwrap();
        create_app(create_app_state(config).await.unwrap()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_readiness_with_memory_backend() {
        let response = memory_app()
            .await
            .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["checks"]["storage"], "healthy");
    }

    #[tokio::test]
    async fn test_empty_section_envelope() {
        let response = memory_app()
            .await
            .oneshot(
                Request::get("/api/v1/sections/new-releases")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["pagination"]["limit"], 24);
        assert_eq!(body["data"]["pagination"]["totalPages"], 0);
    }

    #[tokio::test]
    async fn test_missing_auth_envelope() {
        let response = memory_app()
            .await
            .oneshot(
                Request::post(format!("/api/v1/works/{}/reactions", mastera_core::WorkId::new()))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"action":"like"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "MISSING_AUTH");
    }
}
