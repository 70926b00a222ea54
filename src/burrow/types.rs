use crate::error::{ExporterError, Result};
use serde::{Deserialize, Deserializer};

/// Envelope shared by every Burrow v3 response. `error` may be set even when
/// the HTTP exchange itself succeeded.
#[derive(Debug, Deserialize)]
pub struct BurrowResponse<T> {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub body: T,
}

impl<T> BurrowResponse<T> {
    pub fn into_result(self) -> Result<T> {
        if self.error {
            return Err(ExporterError::Upstream(self.message));
        }
        Ok(self.body)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ClustersBody {
    #[serde(default)]
    pub clusters: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConsumersBody {
    #[serde(default)]
    pub consumers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopicsBody {
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusBody {
    #[serde(default)]
    pub status: ConsumerGroupStatus,
}

#[derive(Debug, Default, Deserialize)]
pub struct OffsetsBody {
    #[serde(default)]
    pub offsets: Vec<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Offset {
    #[serde(default)]
    pub offset: i64,
    /// Epoch milliseconds of the commit.
    #[serde(default)]
    #[allow(dead_code)]
    pub timestamp: i64,
    #[serde(default)]
    #[allow(dead_code)]
    pub lag: i64,
    #[serde(default)]
    pub max_offset: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Partition {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub partition: i32,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub start: Offset,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: Offset,
    /// Passed through as reported, including negative values.
    #[serde(default)]
    pub current_lag: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConsumerGroupStatus {
    // Labels come from the names the group was requested under; Burrow's echo
    // of them is kept for debugging only.
    #[serde(default)]
    #[allow(dead_code)]
    pub cluster: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub group: String,
    #[serde(default)]
    pub status: String,
    /// Passed through as reported, like `current_lag`.
    #[serde(default, rename = "totallag")]
    pub total_lag: i64,
    #[serde(default)]
    #[allow(dead_code)]
    pub maxlag: Option<Partition>,
    #[serde(default)]
    pub partitions: Vec<Partition>,
}

/// Burrow sends `null` for offsets of partitions that never saw a commit.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
