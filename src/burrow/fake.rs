//! In-memory [`StatusSource`] for tests. Anything not registered answers
//! with an upstream error, the way Burrow reports unknown clusters or groups.

use crate::burrow::StatusSource;
use crate::burrow::types::{ConsumerGroupStatus, Offset, Partition};
use crate::error::{ExporterError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct FakeStatusSource {
    clusters: Option<Vec<String>>,
    groups: HashMap<String, Vec<String>>,
    topics: HashMap<String, Vec<String>>,
    lag: HashMap<(String, String), ConsumerGroupStatus>,
    offsets: HashMap<(String, String), Vec<i64>>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeStatusSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clusters(mut self, clusters: &[&str]) -> Self {
        self.clusters = Some(clusters.iter().map(ToString::to_string).collect());
        self
    }

    pub fn with_groups(mut self, cluster: &str, groups: &[&str]) -> Self {
        self.groups.insert(
            cluster.to_string(),
            groups.iter().map(ToString::to_string).collect(),
        );
        self
    }

    pub fn with_topics(mut self, cluster: &str, topics: &[&str]) -> Self {
        self.topics.insert(
            cluster.to_string(),
            topics.iter().map(ToString::to_string).collect(),
        );
        self
    }

    pub fn with_group_status(mut self, status: ConsumerGroupStatus) -> Self {
        self.lag
            .insert((status.cluster.clone(), status.group.clone()), status);
        self
    }

    pub fn with_topic_offsets(mut self, cluster: &str, topic: &str, offsets: &[i64]) -> Self {
        self.offsets
            .insert((cluster.to_string(), topic.to_string()), offsets.to_vec());
        self
    }

    /// Sleep before answering every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

fn not_found(what: &str) -> ExporterError {
    ExporterError::Upstream(format!("{what} not found"))
}

#[async_trait]
impl StatusSource for FakeStatusSource {
    async fn list_clusters(&self) -> Result<Vec<String>> {
        self.record("list_clusters".to_string()).await;
        self.clusters
            .clone()
            .ok_or_else(|| ExporterError::Upstream("no clusters".to_string()))
    }

    async fn list_consumer_groups(&self, cluster: &str) -> Result<Vec<String>> {
        self.record(format!("groups:{cluster}")).await;
        self.groups
            .get(cluster)
            .cloned()
            .ok_or_else(|| not_found("cluster"))
    }

    async fn list_topics(&self, cluster: &str) -> Result<Vec<String>> {
        self.record(format!("topics:{cluster}")).await;
        self.topics
            .get(cluster)
            .cloned()
            .ok_or_else(|| not_found("cluster"))
    }

    async fn consumer_group_lag(
        &self,
        cluster: &str,
        group: &str,
    ) -> Result<ConsumerGroupStatus> {
        self.record(format!("lag:{cluster}/{group}")).await;
        self.lag
            .get(&(cluster.to_string(), group.to_string()))
            .cloned()
            .ok_or_else(|| not_found("consumer"))
    }

    async fn topic_offsets(&self, cluster: &str, topic: &str) -> Result<Vec<i64>> {
        self.record(format!("offsets:{cluster}/{topic}")).await;
        self.offsets
            .get(&(cluster.to_string(), topic.to_string()))
            .cloned()
            .ok_or_else(|| not_found("topic"))
    }
}

pub fn partition(
    topic: &str,
    index: i32,
    status: &str,
    end_offset: i64,
    max_offset: i64,
    current_lag: i64,
) -> Partition {
    Partition {
        topic: topic.to_string(),
        partition: index,
        status: status.to_string(),
        start: Offset::default(),
        end: Offset {
            offset: end_offset,
            timestamp: 0,
            lag: current_lag,
            max_offset,
        },
        current_lag,
    }
}

pub fn group_status(
    cluster: &str,
    group: &str,
    status: &str,
    total_lag: i64,
    partitions: Vec<Partition>,
) -> ConsumerGroupStatus {
    ConsumerGroupStatus {
        cluster: cluster.to_string(),
        group: group.to_string(),
        status: status.to_string(),
        total_lag,
        maxlag: None,
        partitions,
    }
}
