//! Access to the Burrow HTTP API.
//!
//! The collection engine only sees the [`StatusSource`] trait. Transport
//! failures and responses carrying Burrow's `error` flag both surface as an
//! `Err`, so callers handle them on a single path.

pub mod client;
#[cfg(test)]
pub mod fake;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;

pub use client::BurrowClient;
pub use types::ConsumerGroupStatus;

#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn list_clusters(&self) -> Result<Vec<String>>;

    async fn list_consumer_groups(&self, cluster: &str) -> Result<Vec<String>>;

    async fn list_topics(&self, cluster: &str) -> Result<Vec<String>>;

    /// Aggregated lag and status for a consumer group, per partition.
    async fn consumer_group_lag(&self, cluster: &str, group: &str)
    -> Result<ConsumerGroupStatus>;

    /// Log end offsets of a topic, indexed by partition number.
    async fn topic_offsets(&self, cluster: &str, topic: &str) -> Result<Vec<i64>>;
}
