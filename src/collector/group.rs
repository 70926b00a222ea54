use crate::burrow::{ConsumerGroupStatus, StatusSource};
use crate::collector::status::status_ordinal;
use crate::metrics::families::{MetricFamily, MetricFilter};
use crate::metrics::types::MetricPoint;
use tracing::{trace, warn};

/// Fetch a group's lag report and turn it into samples. A failed fetch is
/// logged and yields no samples.
pub async fn collect_group(
    source: &dyn StatusSource,
    filter: &MetricFilter,
    cluster: &str,
    group: &str,
) -> Vec<MetricPoint> {
    match source.consumer_group_lag(cluster, group).await {
        Ok(status) => {
            trace!(
                cluster,
                group,
                partitions = status.partitions.len(),
                "Fetched consumer group lag"
            );
            build_group_points(filter, cluster, group, &status)
        }
        Err(e) => {
            warn!(cluster, group, error = %e, "Failed to fetch consumer group lag, skipping group");
            Vec::new()
        }
    }
}

/// Per-partition samples for every partition in report order, followed by the
/// group-level total lag and status. Disabled families are skipped before any
/// sample is built.
#[allow(clippy::cast_precision_loss)]
pub fn build_group_points(
    filter: &MetricFilter,
    cluster: &str,
    group: &str,
    status: &ConsumerGroupStatus,
) -> Vec<MetricPoint> {
    let mut points = Vec::new();

    for p in &status.partitions {
        let partition = p.partition.to_string();
        let labels = || {
            [
                cluster.to_string(),
                group.to_string(),
                p.topic.clone(),
                partition.clone(),
            ]
        };

        if filter.is_enabled(MetricFamily::PartitionLag) {
            points.push(MetricPoint::gauge(
                MetricFamily::PartitionLag.descriptor(),
                labels(),
                p.current_lag as f64,
            ));
        }

        if filter.is_enabled(MetricFamily::PartitionCurrentOffset) {
            points.push(MetricPoint::gauge(
                MetricFamily::PartitionCurrentOffset.descriptor(),
                labels(),
                p.end.offset as f64,
            ));
        }

        if filter.is_enabled(MetricFamily::PartitionStatus) {
            points.push(MetricPoint::gauge(
                MetricFamily::PartitionStatus.descriptor(),
                labels(),
                f64::from(status_ordinal(&p.status)),
            ));
        }

        if filter.is_enabled(MetricFamily::PartitionMaxOffset) {
            points.push(MetricPoint::gauge(
                MetricFamily::PartitionMaxOffset.descriptor(),
                labels(),
                p.end.max_offset as f64,
            ));
        }
    }

    if filter.is_enabled(MetricFamily::TotalLag) {
        points.push(MetricPoint::gauge(
            MetricFamily::TotalLag.descriptor(),
            [cluster.to_string(), group.to_string()],
            status.total_lag as f64,
        ));
    }

    if filter.is_enabled(MetricFamily::ConsumerStatus) {
        points.push(MetricPoint::gauge(
            MetricFamily::ConsumerStatus.descriptor(),
            [cluster.to_string(), group.to_string()],
            f64::from(status_ordinal(&status.status)),
        ));
    }

    points
}
