use crate::burrow::StatusSource;
use crate::burrow::types::{
    BurrowResponse, ClustersBody, ConsumerGroupStatus, ConsumersBody, OffsetsBody, StatusBody,
    TopicsBody,
};
use crate::config::BurrowConfig;
use crate::error::{ExporterError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};
use url::Url;

/// HTTP client for the Burrow v3 REST API.
#[derive(Debug, Clone)]
pub struct BurrowClient {
    http: reqwest::Client,
    root: Url,
    base: Url,
}

impl BurrowClient {
    pub fn new(config: &BurrowConfig) -> Result<Self> {
        let root = Url::parse(&config.address)?;
        let base = with_segments(&root, &[&format!("v{}", config.api_version)])?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("burrow-exporter/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(base = %base, timeout = ?config.timeout, "Created Burrow client");

        Ok(Self { http, root, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Probe Burrow's admin endpoint. Any 2xx answer counts as healthy.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<()> {
        let url = with_segments(&self.root, &["burrow", "admin"])?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ExporterError::UnexpectedStatus(status.as_u16()))
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        with_segments(&self.base, segments)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        trace!(url = %url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<BurrowResponse<T>>(&body) {
            Ok(parsed) if status.is_success() || parsed.error => parsed.into_result(),
            Ok(_) => Err(ExporterError::UnexpectedStatus(status.as_u16())),
            Err(_) if !status.is_success() => {
                Err(ExporterError::UnexpectedStatus(status.as_u16()))
            }
            Err(e) => Err(ExporterError::Decode(e)),
        }
    }
}

/// Append percent-encoded path segments to `url`.
fn with_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ExporterError::Config(format!("Burrow address is not a base URL: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[async_trait]
impl StatusSource for BurrowClient {
    async fn list_clusters(&self) -> Result<Vec<String>> {
        let url = self.endpoint(&["kafka"])?;
        let body: ClustersBody = self.get_json(url).await?;
        Ok(body.clusters)
    }

    async fn list_consumer_groups(&self, cluster: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&["kafka", cluster, "consumer"])?;
        let body: ConsumersBody = self.get_json(url).await?;
        Ok(body.consumers)
    }

    async fn list_topics(&self, cluster: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&["kafka", cluster, "topic"])?;
        let body: TopicsBody = self.get_json(url).await?;
        Ok(body.topics)
    }

    async fn consumer_group_lag(
        &self,
        cluster: &str,
        group: &str,
    ) -> Result<ConsumerGroupStatus> {
        let url = self.endpoint(&["kafka", cluster, "consumer", group, "lag"])?;
        let body: StatusBody = self.get_json(url).await?;
        Ok(body.status)
    }

    async fn topic_offsets(&self, cluster: &str, topic: &str) -> Result<Vec<i64>> {
        let url = self.endpoint(&["kafka", cluster, "topic", topic])?;
        let body: OffsetsBody = self.get_json(url).await?;
        Ok(body.offsets)
    }
}
