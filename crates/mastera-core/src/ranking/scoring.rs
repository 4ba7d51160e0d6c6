//! Trending score strategies
//!
//! The default weights have no documented derivation. Other strategies plug
//! in through `ScoringStrategy`.

use crate::entities::Work;

/// Computes a comparable score for a work
pub trait ScoringStrategy: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    fn score(&self, work: &Work) -> f64;
}

/// `downloads*0.4 + rating*0.3 + review_count*0.3`, rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTrendingScore {
    pub downloads_weight: f64,
    pub rating_weight: f64,
    pub reviews_weight: f64,
}

impl Default for WeightedTrendingScore {
    fn default() -> Self {
        Self {
            downloads_weight: 0.4,
            rating_weight: 0.3,
            reviews_weight: 0.3,
        }
    }
}

impl ScoringStrategy for WeightedTrendingScore {
    fn name(&self) -> &'static str {
        "weighted-trending"
    }

    fn score(&self, work: &Work) -> f64 {
        let raw = work.downloads as f64 * self.downloads_weight
            + work.rating * self.rating_weight
            + work.review_count as f64 * self.reviews_weight;
        round2(raw)
    }
}

/// Score a work with the default weights
pub fn trending_score(work: &Work) -> f64 {
    WeightedTrendingScore::default().score(work)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A work paired with its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWork {
    pub work: Work,
    pub score: f64,
}

/// Score, sort (score desc, newest first, id asc) and truncate
pub fn rank_by_score(works: Vec<Work>, strategy: &dyn ScoringStrategy, limit: usize) -> Vec<ScoredWork> {
    let mut scored: Vec<ScoredWork> = works
        .into_iter()
        .map(|work| {
            let score = strategy.score(&work);
            ScoredWork { work, score }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.work.created_at.cmp(&a.work.created_at))
            .then_with(|| a.work.id.cmp(&b.work.id))
    });
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{UserId, WorkId};

    fn work(downloads: i64, rating: f64, reviews: i64) -> Work {
        let mut w = Work::new(
            WorkId::new(),
            UserId::new("owner").unwrap(),
            "t".to_string(),
            "f".to_string(),
        );
        w.downloads = downloads;
        w.rating = rating;
        w.review_count = reviews;
        w
    }

    #[test]
    fn test_weights() {
        // 10*0.4 + 4.5*0.3 + 20*0.3 = 4 + 1.35 + 6 = 11.35
        assert!((trending_score(&work(10, 4.5, 20)) - 11.35).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 0*0.4 + 4.333*0.3 + 0 = 1.2999 -> 1.3
        assert!((trending_score(&work(0, 4.333, 0)) - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_work_scores_zero() {
        assert!(trending_score(&work(0, 0.0, 0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rank_by_score_orders_and_truncates() {
        let low = work(1, 0.0, 0);
        let high = work(100, 0.0, 0);
        let mid = work(10, 0.0, 0);

        let ranked = rank_by_score(
            vec![low.clone(), high.clone(), mid.clone()],
            &WeightedTrendingScore::default(),
            2,
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].work.id, high.id);
        assert_eq!(ranked[1].work.id, mid.id);
        assert!(ranked[0].score > ranked[1].score);
    }

    struct DownloadsOnly;

    impl ScoringStrategy for DownloadsOnly {
        fn name(&self) -> &'static str {
            "downloads-only"
        }

        fn score(&self, work: &Work) -> f64 {
            work.downloads as f64
        }
    }

    #[test]
    fn test_custom_strategy() {
        let a = work(5, 5.0, 500);
        let b = work(6, 0.0, 0);
        let ranked = rank_by_score(vec![a, b.clone()], &DownloadsOnly, 10);
        assert_eq!(ranked[0].work.id, b.id);
    }
}
