//! PostgreSQL implementation of WorkRepository
//!
//! Listings are rendered from `WorkFilter`/`WorkOrder` with `QueryBuilder`;
//! every user-supplied value is bound, only static column names are pushed.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use mastera_core::{
    RepoResult, SortDirection, Work, WorkFilter, WorkId, WorkOrder, WorkRepository,
};

use crate::mappers::WorkInsert;
use crate::models::WorkModel;

use super::error::{map_db_error, work_not_found};

const WORK_COLUMNS: &str = "id, title, description, category, language, tags, file_url, \
    thumbnail_url, duration_seconds, status, views, downloads, rating, review_count, \
    created_at, updated_at, owner_user_id, quick_pick, quick_pick_order";

/// PostgreSQL implementation of WorkRepository
#[derive(Clone)]
pub struct PgWorkRepository {
    pool: PgPool,
}

impl PgWorkRepository {
    /// Create a new PgWorkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append `WHERE ...` for the filter
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &WorkFilter) {
    qb.push(" WHERE TRUE");

    if let Some(status) = filter.status {
        qb.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(category) = &filter.category {
        qb.push(" AND category = ").push_bind(category.clone());
    }
    if let Some(language) = &filter.language {
        qb.push(" AND language = ").push_bind(language.clone());
    }
    if let Some(since) = filter.created_since {
        qb.push(" AND created_at >= ").push_bind(since);
    }
    if let Some(quick_pick) = filter.quick_pick {
        qb.push(" AND quick_pick = ").push_bind(quick_pick);
    }
    match filter.has_quick_pick_order {
        Some(true) => {
            qb.push(" AND quick_pick_order IS NOT NULL");
        }
        Some(false) => {
            qb.push(" AND quick_pick_order IS NULL");
        }
        None => {}
    }
}

/// Append `ORDER BY ...`, nulls last, id as final tiebreak
fn push_order(qb: &mut QueryBuilder<'_, Postgres>, order: &WorkOrder) {
    qb.push(" ORDER BY ");
    for field in order.fields() {
        qb.push(field.key.column());
        qb.push(match field.direction {
            SortDirection::Asc => " ASC NULLS LAST, ",
            SortDirection::Desc => " DESC NULLS LAST, ",
        });
    }
    qb.push("id ASC");
}

#[async_trait]
impl WorkRepository for PgWorkRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: WorkId) -> RepoResult<Option<Work>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {WORK_COLUMNS} FROM works"));
        qb.push(" WHERE id = ").push_bind(id.into_inner());

        let result = qb
            .build_query_as::<WorkModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Work::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &WorkFilter) -> RepoResult<i64> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM works");
        push_filter(&mut qb, filter);

        qb.build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_many(
        &self,
        filter: &WorkFilter,
        order: &WorkOrder,
        skip: i64,
        take: i64,
    ) -> RepoResult<Vec<Work>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {WORK_COLUMNS} FROM works"));
        push_filter(&mut qb, filter);
        push_order(&mut qb, order);
        qb.push(" OFFSET ").push_bind(skip.max(0));
        qb.push(" LIMIT ").push_bind(take.max(0));

        let results = qb
            .build_query_as::<WorkModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(Work::try_from).collect()
    }

    #[instrument(skip(self, work), fields(work_id = %work.id))]
    async fn create(&self, work: &Work) -> RepoResult<()> {
        let insert = WorkInsert::new(work);

        sqlx::query(
            r#"
            INSERT INTO works (
                id, title, description, category, language, tags, file_url,
                thumbnail_url, duration_seconds, status, views, downloads, rating,
                review_count, created_at, updated_at, owner_user_id, quick_pick,
                quick_pick_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            "#,
        )
        .bind(insert.id)
        .bind(&work.title)
        .bind(&work.description)
        .bind(&work.category)
        .bind(&work.language)
        .bind(&insert.tags)
        .bind(&work.file_url)
        .bind(&work.thumbnail_url)
        .bind(work.duration_seconds)
        .bind(insert.status)
        .bind(work.views)
        .bind(work.downloads)
        .bind(work.rating)
        .bind(work.review_count)
        .bind(work.created_at)
        .bind(work.updated_at)
        .bind(insert.owner_user_id)
        .bind(work.quick_pick)
        .bind(work.quick_pick_order)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_quick_pick(
        &self,
        id: WorkId,
        quick_pick: bool,
        order: Option<i32>,
    ) -> RepoResult<Work> {
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE works SET quick_pick = ");
        qb.push_bind(quick_pick)
            .push(", quick_pick_order = ")
            .push_bind(order)
            .push(", updated_at = NOW() WHERE id = ")
            .push_bind(id.into_inner())
            .push(format!(" RETURNING {WORK_COLUMNS}"));

        let model = qb
            .build_query_as::<WorkModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| work_not_found(id))?;

        Work::try_from(model)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mastera_core::{SortField, SortKey};

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgWorkRepository>();
    }

    #[test]
    fn test_filter_sql() {
        let filter = WorkFilter::published()
            .with_category(Some("music".to_string()))
            .created_since(Utc::now())
            .quick_picks(false);

        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM works");
        push_filter(&mut qb, &filter);

        assert_eq!(
            qb.sql(),
            "SELECT COUNT(*) FROM works WHERE TRUE AND status = $1 AND category = $2 \
             AND created_at >= $3 AND quick_pick = $4 AND quick_pick_order IS NULL"
        );
    }

    #[test]
    fn test_order_sql() {
        let order = WorkOrder::new(vec![
            SortField::desc(SortKey::Views),
            SortField::asc(SortKey::QuickPickOrder),
        ]);

        let mut qb = QueryBuilder::<Postgres>::new("");
        push_order(&mut qb, &order);

        assert_eq!(
            qb.sql(),
            " ORDER BY views DESC NULLS LAST, quick_pick_order ASC NULLS LAST, id ASC"
        );
    }
}
