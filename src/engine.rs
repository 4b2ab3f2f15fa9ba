//! Batch orchestration: gate all (parent, child) combinations and evaluate
//! the gated pairs on a bounded worker pool

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::evaluator::PairEvaluator;
use crate::fetch::{FetchError, PageFetcher};
use crate::similarity::lexical;
use crate::types::{Domain, ResultMapping, SimilarityReport};

/// Stateless scanning service: configuration plus a shared fetcher.
pub struct ScanEngine {
    evaluator: Arc<PairEvaluator>,
    lexical_threshold: u32,
    max_concurrent: usize,
}

impl ScanEngine {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let fetcher = PageFetcher::new(config.fetch.clone())?;
        Ok(Self {
            evaluator: Arc::new(PairEvaluator::new(fetcher)),
            lexical_threshold: config.scan.lexical_threshold,
            max_concurrent: config.scan.max_concurrent_evaluations.max(1),
        })
    }

    /// Scan every (parent, child) combination.
    ///
    /// Pairs that pass the lexical gate are evaluated concurrently, bounded by
    /// the configured worker pool size. Results are merged in input order, not
    /// completion order, so output is deterministic for fixed fetched content.
    /// Parents with no gated children are omitted from the mapping. Dropping
    /// the returned future cancels in-flight evaluations.
    pub async fn run(&self, whitelist: &[Domain], candidates: &[Domain]) -> ResultMapping {
        let mut gated: Vec<(usize, usize)> = Vec::new();
        for (pi, parent) in whitelist.iter().enumerate() {
            for (ci, child) in candidates.iter().enumerate() {
                let ratio = lexical::ratio(parent, child);
                if ratio >= self.lexical_threshold {
                    debug!("gated pair {parent} / {child} (ratio {ratio})");
                    gated.push((pi, ci));
                }
            }
        }

        info!(
            "scanning {} gated pairs out of {} combinations",
            gated.len(),
            whitelist.len() * candidates.len()
        );

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();
        for (pi, ci) in gated {
            let evaluator = Arc::clone(&self.evaluator);
            let semaphore = Arc::clone(&semaphore);
            let parent = whitelist[pi].clone();
            let child = candidates[ci].clone();

            tasks.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return None; // semaphore closed during shutdown
                };
                let report = evaluator.evaluate(&parent, &child).await;
                Some((pi, ci, report))
            });
        }

        let mut per_parent: Vec<Vec<(usize, SimilarityReport)>> =
            vec![Vec::new(); whitelist.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some((pi, ci, report))) => per_parent[pi].push((ci, report)),
                Ok(None) => {}
                Err(err) => warn!("pair evaluation task failed: {err}"),
            }
        }

        let mut mapping = ResultMapping::new();
        for (pi, parent) in whitelist.iter().enumerate() {
            let mut children = std::mem::take(&mut per_parent[pi]);
            if children.is_empty() {
                continue;
            }
            children.sort_by_key(|(ci, _)| *ci);
            mapping.push(
                parent.clone(),
                children
                    .into_iter()
                    .map(|(ci, report)| (candidates[ci].clone(), report))
                    .collect(),
            );
        }

        mapping
    }
}
