use crate::burrow::StatusSource;
use crate::collector::group::collect_group;
use crate::collector::topic::collect_topic;
use crate::error::Result;
use crate::metrics::families::MetricFilter;
use crate::metrics::types::MetricPoint;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Scrapes one Burrow cluster: every consumer group, then every topic.
///
/// Nothing in here fails. A listing that cannot be fetched counts as empty
/// and a group or topic that cannot be fetched contributes no samples, so the
/// result is whatever could be gathered.
pub struct ClusterScraper<'a> {
    source: &'a dyn StatusSource,
    filter: &'a MetricFilter,
}

impl<'a> ClusterScraper<'a> {
    pub fn new(source: &'a dyn StatusSource, filter: &'a MetricFilter) -> Self {
        Self { source, filter }
    }

    #[instrument(skip(self))]
    pub async fn scrape(&self, cluster: &str) -> Vec<MetricPoint> {
        let start = Instant::now();
        let mut points = Vec::new();

        let groups = listing_or_empty(
            self.source.list_consumer_groups(cluster).await,
            cluster,
            "consumer groups",
        );
        for group in &groups {
            points.extend(collect_group(self.source, self.filter, cluster, group).await);
        }

        let topics = listing_or_empty(self.source.list_topics(cluster).await, cluster, "topics");
        for topic in &topics {
            points.extend(collect_topic(self.source, self.filter, cluster, topic).await);
        }

        debug!(
            groups = groups.len(),
            topics = topics.len(),
            points = points.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Scraped cluster"
        );

        points
    }
}

fn listing_or_empty(result: Result<Vec<String>>, cluster: &str, what: &str) -> Vec<String> {
    result.unwrap_or_else(|e| {
        warn!(cluster, error = %e, "Failed to list {what}, skipping");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::burrow::fake::{FakeStatusSource, group_status, partition};
    use crate::metrics::families::MetricFamily;

    fn healthy_cluster() -> FakeStatusSource {
        FakeStatusSource::new()
            .with_groups("c1", &["g-bad", "g-ok"])
            .with_topics("c1", &["t1"])
            .with_group_status(group_status(
                "c1",
                "g-ok",
                "OK",
                3,
                vec![partition("t1", 0, "OK", 7, 10, 3)],
            ))
            .with_topic_offsets("c1", "t1", &[10])
    }

    #[tokio::test]
    async fn test_broken_group_does_not_affect_siblings() {
        let source = healthy_cluster();
        let filter = MetricFilter::default();

        let points = ClusterScraper::new(&source, &filter).scrape("c1").await;

        assert!(points.iter().all(|p| p.label("group") != Some("g-bad")));
        assert_eq!(
            points
                .iter()
                .filter(|p| p.label("group") == Some("g-ok"))
                .count(),
            6
        );
        assert_eq!(
            points
                .iter()
                .filter(|p| p.descriptor == MetricFamily::TopicPartitionOffset.descriptor())
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_visits_groups_then_topics_in_listing_order() {
        let source = healthy_cluster();
        let filter = MetricFilter::default();

        ClusterScraper::new(&source, &filter).scrape("c1").await;

        assert_eq!(
            source.calls(),
            vec![
                "groups:c1",
                "lag:c1/g-bad",
                "lag:c1/g-ok",
                "topics:c1",
                "offsets:c1/t1"
            ]
        );
    }

    #[tokio::test]
    async fn test_group_listing_failure_keeps_topic_metrics() {
        let source = FakeStatusSource::new()
            .with_topics("c1", &["t1"])
            .with_topic_offsets("c1", "t1", &[10, 20]);
        let filter = MetricFilter::default();

        let points = ClusterScraper::new(&source, &filter).scrape("c1").await;

        assert_eq!(points.len(), 2);
        assert_eq!(source.calls(), vec!["groups:c1", "topics:c1", "offsets:c1/t1"]);
    }

    #[tokio::test]
    async fn test_topic_listing_failure_keeps_group_metrics() {
        let source = FakeStatusSource::new()
            .with_groups("c1", &["g1"])
            .with_group_status(group_status("c1", "g1", "OK", 0, vec![]));
        let filter = MetricFilter::default();

        let points = ClusterScraper::new(&source, &filter).scrape("c1").await;

        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.label("group") == Some("g1")));
    }

    #[tokio::test]
    async fn test_unknown_cluster_yields_nothing() {
        let source = FakeStatusSource::new();
        let filter = MetricFilter::default();

        assert!(ClusterScraper::new(&source, &filter).scrape("nope").await.is_empty());
    }
}
