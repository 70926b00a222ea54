pub const METRIC_PARTITION_LAG: &str = "kafka_burrow_partition_lag";
pub const METRIC_PARTITION_CURRENT_OFFSET: &str = "kafka_burrow_partition_current_offset";
pub const METRIC_PARTITION_STATUS: &str = "kafka_burrow_partition_status";
pub const METRIC_PARTITION_MAX_OFFSET: &str = "kafka_burrow_partition_max_offset";
pub const METRIC_TOTAL_LAG: &str = "kafka_burrow_total_lag";
pub const METRIC_GROUP_STATUS: &str = "kafka_burrow_status";
pub const METRIC_TOPIC_PARTITION_OFFSET: &str = "kafka_burrow_topic_partition_offset";

pub const METRIC_SCRAPE_DURATION_SECONDS: &str = "kafka_burrow_scrape_duration_seconds";
pub const METRIC_UP: &str = "kafka_burrow_up";
pub const METRIC_SCRAPE_CLUSTERS: &str = "kafka_burrow_scrape_clusters";
pub const METRIC_BUILD_INFO: &str = "burrow_exporter_build_info";

pub const LABEL_CLUSTER: &str = "cluster";
pub const LABEL_GROUP: &str = "group";
pub const LABEL_TOPIC: &str = "topic";
pub const LABEL_PARTITION: &str = "partition";
pub const LABEL_VERSION: &str = "version";

pub const HELP_PARTITION_LAG: &str =
    "The lag of the latest offset commit on a partition as reported by burrow.";
pub const HELP_PARTITION_CURRENT_OFFSET: &str =
    "The latest offset commit on a partition as reported by burrow.";
pub const HELP_PARTITION_STATUS: &str = "The status of a partition as reported by burrow.";
pub const HELP_PARTITION_MAX_OFFSET: &str =
    "The log end offset on a partition as reported by burrow.";
pub const HELP_TOTAL_LAG: &str =
    "The total amount of lag for the consumer group as reported by burrow.";
pub const HELP_GROUP_STATUS: &str = "The status of a consumer group as reported by burrow.";
pub const HELP_TOPIC_PARTITION_OFFSET: &str =
    "The latest offset on a topic's partition as reported by burrow.";

pub const HELP_SCRAPE_DURATION_SECONDS: &str = "Duration of the burrow collection cycle in seconds";
pub const HELP_UP: &str = "1 if burrow returned the cluster list during the last cycle, 0 otherwise";
pub const HELP_SCRAPE_CLUSTERS: &str = "Number of clusters visited during the collection cycle";
pub const HELP_BUILD_INFO: &str = "Build information of the exporter, value is always 1";

pub const PARTITION_LABELS: &[&str] = &[LABEL_CLUSTER, LABEL_GROUP, LABEL_TOPIC, LABEL_PARTITION];
pub const GROUP_LABELS: &[&str] = &[LABEL_CLUSTER, LABEL_GROUP];
pub const TOPIC_PARTITION_LABELS: &[&str] = &[LABEL_CLUSTER, LABEL_TOPIC, LABEL_PARTITION];

/// Name, help text and label schema of a metric family.
#[derive(Debug, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub labels: &'static [&'static str],
}

pub static PARTITION_LAG: MetricDescriptor = MetricDescriptor {
    name: METRIC_PARTITION_LAG,
    help: HELP_PARTITION_LAG,
    labels: PARTITION_LABELS,
};

pub static PARTITION_CURRENT_OFFSET: MetricDescriptor = MetricDescriptor {
    name: METRIC_PARTITION_CURRENT_OFFSET,
    help: HELP_PARTITION_CURRENT_OFFSET,
    labels: PARTITION_LABELS,
};

pub static PARTITION_STATUS: MetricDescriptor = MetricDescriptor {
    name: METRIC_PARTITION_STATUS,
    help: HELP_PARTITION_STATUS,
    labels: PARTITION_LABELS,
};

pub static PARTITION_MAX_OFFSET: MetricDescriptor = MetricDescriptor {
    name: METRIC_PARTITION_MAX_OFFSET,
    help: HELP_PARTITION_MAX_OFFSET,
    labels: PARTITION_LABELS,
};

pub static TOTAL_LAG: MetricDescriptor = MetricDescriptor {
    name: METRIC_TOTAL_LAG,
    help: HELP_TOTAL_LAG,
    labels: GROUP_LABELS,
};

pub static GROUP_STATUS: MetricDescriptor = MetricDescriptor {
    name: METRIC_GROUP_STATUS,
    help: HELP_GROUP_STATUS,
    labels: GROUP_LABELS,
};

pub static TOPIC_PARTITION_OFFSET: MetricDescriptor = MetricDescriptor {
    name: METRIC_TOPIC_PARTITION_OFFSET,
    help: HELP_TOPIC_PARTITION_OFFSET,
    labels: TOPIC_PARTITION_LABELS,
};

pub static SCRAPE_DURATION_SECONDS: MetricDescriptor = MetricDescriptor {
    name: METRIC_SCRAPE_DURATION_SECONDS,
    help: HELP_SCRAPE_DURATION_SECONDS,
    labels: &[],
};

pub static UP: MetricDescriptor = MetricDescriptor {
    name: METRIC_UP,
    help: HELP_UP,
    labels: &[],
};

pub static SCRAPE_CLUSTERS: MetricDescriptor = MetricDescriptor {
    name: METRIC_SCRAPE_CLUSTERS,
    help: HELP_SCRAPE_CLUSTERS,
    labels: &[],
};

pub static BUILD_INFO: MetricDescriptor = MetricDescriptor {
    name: METRIC_BUILD_INFO,
    help: HELP_BUILD_INFO,
    labels: &[LABEL_VERSION],
};
