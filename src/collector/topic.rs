use crate::burrow::StatusSource;
use crate::metrics::families::{MetricFamily, MetricFilter};
use crate::metrics::types::MetricPoint;
use tracing::warn;

/// Fetch a topic's log end offsets and turn them into samples. A failed
/// fetch is logged and yields no samples.
pub async fn collect_topic(
    source: &dyn StatusSource,
    filter: &MetricFilter,
    cluster: &str,
    topic: &str,
) -> Vec<MetricPoint> {
    match source.topic_offsets(cluster, topic).await {
        Ok(offsets) => build_topic_points(filter, cluster, topic, &offsets),
        Err(e) => {
            warn!(cluster, topic, error = %e, "Failed to fetch topic offsets, skipping topic");
            Vec::new()
        }
    }
}

/// One sample per offset; the partition is the offset's position in the list.
#[allow(clippy::cast_precision_loss)]
pub fn build_topic_points(
    filter: &MetricFilter,
    cluster: &str,
    topic: &str,
    offsets: &[i64],
) -> Vec<MetricPoint> {
    if !filter.is_enabled(MetricFamily::TopicPartitionOffset) {
        return Vec::new();
    }

    offsets
        .iter()
        .enumerate()
        .map(|(partition, offset)| {
            MetricPoint::gauge(
                MetricFamily::TopicPartitionOffset.descriptor(),
                [cluster.to_string(), topic.to_string(), partition.to_string()],
                *offset as f64,
            )
        })
        .collect()
}
