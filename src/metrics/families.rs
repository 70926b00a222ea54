use crate::error::{ExporterError, Result};
use crate::metrics::definitions::{
    GROUP_STATUS, MetricDescriptor, PARTITION_CURRENT_OFFSET, PARTITION_LAG, PARTITION_MAX_OFFSET,
    PARTITION_STATUS, TOPIC_PARTITION_OFFSET, TOTAL_LAG,
};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Metric families produced from Burrow data. Each one can be switched off
/// by its configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    PartitionLag,
    PartitionCurrentOffset,
    PartitionStatus,
    PartitionMaxOffset,
    TotalLag,
    ConsumerStatus,
    TopicPartitionOffset,
}

impl MetricFamily {
    pub const ALL: [Self; 7] = [
        Self::PartitionLag,
        Self::PartitionCurrentOffset,
        Self::PartitionStatus,
        Self::PartitionMaxOffset,
        Self::TotalLag,
        Self::ConsumerStatus,
        Self::TopicPartitionOffset,
    ];

    pub const fn config_name(self) -> &'static str {
        match self {
            Self::PartitionLag => "partition-lag",
            Self::PartitionCurrentOffset => "partition-current-offset",
            Self::PartitionStatus => "partition-status",
            Self::PartitionMaxOffset => "partition-max-offset",
            Self::TotalLag => "total-lag",
            Self::ConsumerStatus => "consumer-status",
            Self::TopicPartitionOffset => "topic-partition-offset",
        }
    }

    pub fn descriptor(self) -> &'static MetricDescriptor {
        match self {
            Self::PartitionLag => &PARTITION_LAG,
            Self::PartitionCurrentOffset => &PARTITION_CURRENT_OFFSET,
            Self::PartitionStatus => &PARTITION_STATUS,
            Self::PartitionMaxOffset => &PARTITION_MAX_OFFSET,
            Self::TotalLag => &TOTAL_LAG,
            Self::ConsumerStatus => &GROUP_STATUS,
            Self::TopicPartitionOffset => &TOPIC_PARTITION_OFFSET,
        }
    }
}

impl fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_name())
    }
}

impl FromStr for MetricFamily {
    type Err = ExporterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.config_name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|f| f.config_name()).collect();
                ExporterError::Config(format!(
                    "Unknown metric '{s}', expected one of: {}",
                    known.join(", ")
                ))
            })
    }
}

/// The set of disabled families. Built once at startup, read by every cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricFilter {
    disabled: HashSet<MetricFamily>,
}

impl MetricFilter {
    pub fn new(disabled: impl IntoIterator<Item = MetricFamily>) -> Self {
        Self {
            disabled: disabled.into_iter().collect(),
        }
    }

    /// Parse configuration names. Blank entries are ignored so that an empty
    /// comma-separated flag disables nothing.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        names
            .iter()
            .map(|n| n.as_ref().trim())
            .filter(|n| !n.is_empty())
            .map(MetricFamily::from_str)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    pub fn is_enabled(&self, family: MetricFamily) -> bool {
        !self.disabled.contains(&family)
    }

    pub fn disabled(&self) -> impl Iterator<Item = MetricFamily> + '_ {
        MetricFamily::ALL
            .into_iter()
            .filter(|f| self.disabled.contains(f))
    }
}
