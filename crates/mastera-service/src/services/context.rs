//! Service context - dependency container for services
//!
//! Holds the repositories, the active scoring strategy, and the ranking knobs
//! needed by services.

use std::sync::Arc;

use mastera_common::{JwtService, RankingConfig};
use mastera_core::traits::{ReactionRepository, WorkRepository};
use mastera_core::{ScoringStrategy, WeightedTrendingScore};

use super::error::{ServiceError, ServiceResult};

/// Role claim required for curation when none is configured
pub const DEFAULT_ADMIN_ROLE: &str = "admin";

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// Storage is reached only through the repository traits, so the same
/// services run over Postgres or the in-memory backend.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    work_repo: Arc<dyn WorkRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Ranking
    scoring: Arc<dyn ScoringStrategy>,
    ranking: RankingConfig,

    // Auth
    jwt_service: Arc<JwtService>,
    admin_role: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        work_repo: Arc<dyn WorkRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        scoring: Arc<dyn ScoringStrategy>,
        ranking: RankingConfig,
        jwt_service: Arc<JwtService>,
        admin_role: String,
    ) -> Self {
        Self {
            work_repo,
            reaction_repo,
            scoring,
            ranking,
            jwt_service,
            admin_role,
        }
    }

    // === Repositories ===

    /// Get the work repository
    pub fn work_repo(&self) -> &dyn WorkRepository {
        self.work_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Ranking ===

    /// Get the active trending score strategy
    pub fn scoring(&self) -> &dyn ScoringStrategy {
        self.scoring.as_ref()
    }

    pub fn ranking(&self) -> &RankingConfig {
        &self.ranking
    }

    // === Auth ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Role claim that grants curation rights
    pub fn admin_role(&self) -> &str {
        &self.admin_role
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("scoring", &self.scoring.name())
            .field("ranking", &self.ranking)
            .field("admin_role", &self.admin_role)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    work_repo: Option<Arc<dyn WorkRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    scoring: Option<Arc<dyn ScoringStrategy>>,
    ranking: Option<RankingConfig>,
    jwt_service: Option<Arc<JwtService>>,
    admin_role: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            work_repo: None,
            reaction_repo: None,
            scoring: None,
            ranking: None,
            jwt_service: None,
            admin_role: None,
        }
    }

    pub fn work_repo(mut self, repo: Arc<dyn WorkRepository>) -> Self {
        self.work_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    /// Replace the default `WeightedTrendingScore`
    pub fn scoring(mut self, strategy: Arc<dyn ScoringStrategy>) -> Self {
        self.scoring = Some(strategy);
        self
    }

    pub fn ranking(mut self, config: RankingConfig) -> Self {
        self.ranking = Some(config);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn admin_role(mut self, role: impl Into<String>) -> Self {
        self.admin_role = Some(role.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::MissingComponent` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.work_repo
                .ok_or_else(|| ServiceError::MissingComponent("work_repo"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::MissingComponent("reaction_repo"))?,
            self.scoring
                .unwrap_or_else(|| Arc::new(WeightedTrendingScore::default())),
            self.ranking.unwrap_or_default(),
            self.jwt_service
                .ok_or_else(|| ServiceError::MissingComponent("jwt_service"))?,
            self.admin_role
                .unwrap_or_else(|| DEFAULT_ADMIN_ROLE.to_string()),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
