//! Ranking service
//!
//! Section listings, homepage quick picks and the trending-score feed. All
//! reads go through `WorkRepository` with filters and orders built from the
//! static section table in `mastera_core::ranking`.

use chrono::Utc;
use mastera_core::{
    merge_quick_picks, quick_pick_shortfall, rank_by_score, Page, PageInfo, PageRequest, ScoredWork,
    Section, SectionRule, SortField, SortKey, Work, WorkFilter, WorkOrder,
};
use tracing::{debug, instrument};

use crate::dto::{PaginatedResponse, SectionQuery, TrendingWorkResponse, WorkResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Ranking service
pub struct RankingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RankingService<'a> {
    /// Create a new RankingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List one page of a named section.
    ///
    /// Unknown section ids fall back to newest-first instead of failing.
    #[instrument(skip(self))]
    pub async fn list_section(
        &self,
        section_id: &str,
        query: SectionQuery,
    ) -> ServiceResult<PaginatedResponse<WorkResponse>> {
        let rule = SectionRule::resolve(section_id);
        let request = PageRequest::new(
            query.page,
            query.limit,
            rule.default_limit,
            self.ctx.ranking().max_limit,
        );
        let filter = rule.filter(Utc::now(), query.category, query.language);
        let order = rule.work_order();

        let repo = self.ctx.work_repo();
        let total = repo.count(&filter).await?;
        let items = repo
            .find_many(&filter, &order, request.skip(), request.take())
            .await?;

        debug!(
            section = section_id,
            known = Section::from_id(section_id).is_some(),
            total,
            returned = items.len(),
            "Section listed"
        );

        Ok(Page::new(items, PageInfo::new(&request, total)).into())
    }

    /// Curated homepage picks.
    ///
    /// Explicitly ordered picks come first; unordered picks fill the rest,
    /// newest first.
    #[instrument(skip(self))]
    pub async fn homepage_quick_picks(&self, limit: Option<u32>) -> ServiceResult<Vec<WorkResponse>> {
        let limit = self.clamp_limit(limit, self.ctx.ranking().quick_picks_limit);
        let repo = self.ctx.work_repo();

        let ordered = repo
            .find_many(
                &WorkFilter::published().quick_picks(true),
                &WorkOrder::new(vec![SortField::asc(SortKey::QuickPickOrder)]),
                0,
                i64::from(limit),
            )
            .await?;

        let shortfall = quick_pick_shortfall(limit as usize, ordered.len());
        let recent = if shortfall > 0 {
            repo.find_many(
                &WorkFilter::published().quick_picks(false),
                &WorkOrder::new(vec![SortField::desc(SortKey::CreatedAt)]),
                0,
                i64::try_from(shortfall).unwrap_or(i64::MAX),
            )
            .await?
        } else {
            Vec::new()
        };

        Ok(to_responses(merge_quick_picks(ordered, recent, limit as usize)))
    }

    /// Works ranked by the active scoring strategy.
    ///
    /// Every published work is scored. Works are read in batches of the
    /// configured size and only the running top `limit` is kept between
    /// batches.
    #[instrument(skip(self))]
    pub async fn trending_works(&self, limit: Option<u32>) -> ServiceResult<Vec<TrendingWorkResponse>> {
        let limit = self.clamp_limit(limit, Section::Trending.rule().default_limit) as usize;
        let batch_size = i64::from(self.ctx.ranking().trending_batch.max(1));
        let strategy = self.ctx.scoring();
        let filter = WorkFilter::published();
        let order = WorkOrder::new(vec![SortField::desc(SortKey::CreatedAt)]);

        let mut top: Vec<ScoredWork> = Vec::new();
        let mut skip = 0;
        let mut scanned = 0;
        loop {
            let batch = self
                .ctx
                .work_repo()
                .find_many(&filter, &order, skip, batch_size)
                .await?;
            let fetched = batch.len();
            scanned += fetched;

            let candidates = top.into_iter().map(|scored| scored.work).chain(batch).collect();
            top = rank_by_score(candidates, strategy, limit);

            if (fetched as i64) < batch_size {
                break;
            }
            skip += batch_size;
        }

        debug!(strategy = strategy.name(), scanned, "Scored trending works");

        Ok(top.into_iter().map(TrendingWorkResponse::from).collect())
    }

    fn clamp_limit(&self, limit: Option<u32>, default_limit: u32) -> u32 {
        let max_limit = self.ctx.ranking().max_limit.max(1);
        limit.unwrap_or(default_limit).clamp(1, max_limit)
    }
}

fn to_responses(works: Vec<Work>) -> Vec<WorkResponse> {
    works.into_iter().map(WorkResponse::from).collect()
}
