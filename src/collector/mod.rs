//! Collection cycle over every cluster Burrow knows about.

pub mod group;
pub mod status;
pub mod topic;

use crate::burrow::StatusSource;
use crate::cluster::ClusterScraper;
use crate::metrics::families::MetricFilter;
use crate::metrics::types::MetricSink;
use futures::StreamExt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Completed,
    /// Burrow could not list its clusters; the cycle produced nothing.
    ClusterListFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    pub clusters: usize,
    pub samples: usize,
    pub duration: Duration,
}

impl CycleReport {
    pub const fn is_up(&self) -> bool {
        matches!(self.outcome, CycleOutcome::Completed)
    }
}

pub struct BurrowCollector {
    source: Arc<dyn StatusSource>,
    filter: MetricFilter,
    max_concurrent_clusters: usize,
    cycle_lock: Mutex<()>,
}

impl BurrowCollector {
    pub fn new(
        source: Arc<dyn StatusSource>,
        filter: MetricFilter,
        max_concurrent_clusters: usize,
    ) -> Self {
        Self {
            source,
            filter,
            max_concurrent_clusters: max_concurrent_clusters.max(1),
            cycle_lock: Mutex::new(()),
        }
    }

    /// Run one collection cycle, handing samples to `sink` cluster by cluster.
    ///
    /// Cycles never overlap: a call made while another cycle is running waits
    /// for it to finish and then runs its own cycle against fresh data.
    pub async fn collect<S: MetricSink + ?Sized>(&self, sink: &mut S) -> CycleReport {
        let _cycle = self.cycle_lock.lock().await;
        let start = Instant::now();
        info!("Scraping burrow");

        let clusters = match self.source.list_clusters().await {
            Ok(clusters) => clusters,
            Err(e) => {
                error!(error = %e, "Failed listing clusters");
                return finish(CycleOutcome::ClusterListFailed, 0, 0, start);
            }
        };

        let scraper = ClusterScraper::new(self.source.as_ref(), &self.filter);
        let mut samples = 0;

        // Futures are lazy, so building them up front starts no requests;
        // `buffered` keeps listing order even when clusters run concurrently
        let scrapes: Vec<_> = clusters.iter().map(|c| scraper.scrape(c)).collect();
        let mut results =
            futures::stream::iter(scrapes).buffered(self.max_concurrent_clusters);

        while let Some(points) = results.next().await {
            samples += points.len();
            for point in points {
                sink.accept(point);
            }
        }

        finish(CycleOutcome::Completed, clusters.len(), samples, start)
    }
}

fn finish(outcome: CycleOutcome, clusters: usize, samples: usize, start: Instant) -> CycleReport {
    let duration = start.elapsed();
    info!(
        outcome = ?outcome,
        clusters,
        samples,
        "Finished scraping burrow, took {:?}",
        duration
    );

    CycleReport {
        outcome,
        clusters,
        samples,
        duration,
    }
}

impl std::fmt::Debug for BurrowCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BurrowCollector")
            .field("filter", &self.filter)
            .field("max_concurrent_clusters", &self.max_concurrent_clusters)
            .finish_non_exhaustive()
    }
}
