//! Shared fixtures for service tests

use std::sync::Arc;

use chrono::{Duration, Utc};
use mastera_common::{JwtService, RankingConfig};
use mastera_core::{UserId, Work, WorkId, WorkRepository};
use mastera_db::{InMemoryReactionRepository, InMemoryWorkRepository};

use super::context::{ServiceContext, ServiceContextBuilder};

pub(crate) struct Fixture {
    pub works: Arc<InMemoryWorkRepository>,
    pub reactions: Arc<InMemoryReactionRepository>,
    pub ctx: ServiceContext,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_ranking(RankingConfig::default())
    }

    pub fn with_ranking(ranking: RankingConfig) -> Self {
        let works = Arc::new(InMemoryWorkRepository::new());
        let reactions = Arc::new(InMemoryReactionRepository::new());
        let ctx = ServiceContextBuilder::new()
            .work_repo(works.clone())
            .reaction_repo(reactions.clone())
            .ranking(ranking)
            .jwt_service(Arc::new(JwtService::new("test-secret")))
            .build()
            .unwrap();

        Self {
            works,
            reactions,
            ctx,
        }
    }

    /// Insert a published work created `age_days` ago
    pub async fn seed(&self, title: &str, views: i64, age_days: i64) -> Work {
        let mut work = published(title);
        work.views = views;
        work.created_at = Utc::now() - Duration::days(age_days);
        self.insert(work).await
    }

    pub async fn insert(&self, work: Work) -> Work {
        self.works.create(&work).await.unwrap();
        work
    }
}

pub(crate) fn published(title: &str) -> Work {
    let mut work = Work::new(
        WorkId::new(),
        user("creator"),
        title.to_string(),
        format!("media://{title}"),
    );
    work.publish();
    work
}

pub(crate) fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}
