//! In-memory implementation of WorkRepository

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::instrument;

use mastera_core::{
    DomainError, RepoResult, Work, WorkFilter, WorkId, WorkOrder, WorkRepository,
};

#[derive(Debug, Default)]
pub struct InMemoryWorkRepository {
    works: RwLock<HashMap<WorkId, Work>>,
}

impl InMemoryWorkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored works
    pub fn len(&self) -> usize {
        self.works.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.read().is_empty()
    }
}

fn to_usize(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

#[async_trait]
impl WorkRepository for InMemoryWorkRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: WorkId) -> RepoResult<Option<Work>> {
        Ok(self.works.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &WorkFilter) -> RepoResult<i64> {
        let count = self.works.read().values().filter(|w| filter.matches(w)).count();
        i64::try_from(count).map_err(|e| DomainError::InternalError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn find_many(
        &self,
        filter: &WorkFilter,
        order: &WorkOrder,
        skip: i64,
        take: i64,
    ) -> RepoResult<Vec<Work>> {
        let mut matching: Vec<Work> = self
            .works
            .read()
            .values()
            .filter(|w| filter.matches(w))
            .cloned()
            .collect();

        matching.sort_by(|a, b| order.compare(a, b));

        Ok(matching
            .into_iter()
            .skip(to_usize(skip))
            .take(to_usize(take))
            .collect())
    }

    #[instrument(skip(self, work), fields(work_id = %work.id))]
    async fn create(&self, work: &Work) -> RepoResult<()> {
        let mut works = self.works.write();
        if works.contains_key(&work.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate work id {}",
                work.id
            )));
        }
        works.insert(work.id, work.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_quick_pick(
        &self,
        id: WorkId,
        quick_pick: bool,
        order: Option<i32>,
    ) -> RepoResult<Work> {
        let mut works = self.works.write();
        let work = works.get_mut(&id).ok_or(DomainError::WorkNotFound(id))?;

        work.quick_pick = quick_pick;
        work.quick_pick_order = order;
        work.updated_at = Utc::now();
        Ok(work.clone())
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastera_core::{SortField, SortKey, UserId};

    fn published(title: &str, views: i64) -> Work {
        let mut w = Work::new(
            WorkId::new(),
            UserId::new("owner").unwrap(),
            title.to_string(),
            format!("media://{title}"),
        );
        w.views = views;
        w.publish();
        w
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryWorkRepository::new();
        let work = published("a", 1);
        repo.create(&work).await.unwrap();

        assert_eq!(repo.find_by_id(work.id).await.unwrap(), Some(work.clone()));
        assert!(repo.find_by_id(WorkId::new()).await.unwrap().is_none());
        assert!(repo.create(&work).await.is_err());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_find_many_sorts_and_windows() {
        let repo = InMemoryWorkRepository::new();
        for (title, views) in [("low", 1), ("high", 30), ("mid", 10)] {
            repo.create(&published(title, views)).await.unwrap();
        }
        let mut draft = published("draft", 100);
        draft.status = mastera_core::WorkStatus::Draft;
        repo.create(&draft).await.unwrap();

        let order = WorkOrder::new(vec![SortField::desc(SortKey::Views)]);
        let filter = WorkFilter::published();

        let page = repo.find_many(&filter, &order, 1, 5).await.unwrap();
        let titles: Vec<_> = page.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["mid", "low"]);
        assert_eq!(repo.count(&filter).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_quick_pick() {
        let repo = InMemoryWorkRepository::new();
        let work = published("a", 1);
        repo.create(&work).await.unwrap();

        let updated = repo.update_quick_pick(work.id, true, Some(2)).await.unwrap();
        assert!(updated.quick_pick);
        assert_eq!(updated.quick_pick_order, Some(2));

        let err = repo.update_quick_pick(WorkId::new(), true, None).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
