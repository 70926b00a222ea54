use crate::error::{ExporterError, Result};
use crate::metrics::families::MetricFilter;
use regex::Regex;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Paths served by the exporter itself that the telemetry path may not shadow.
const RESERVED_PATHS: &[&str] = &["/", "/health", "/ready"];

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub exporter: ExporterConfig,
    #[serde(default)]
    pub burrow: BurrowConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExporterConfig {
    #[serde(default = "default_http_host")]
    pub http_host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: String,
    /// Metric families that are never produced, by configuration name.
    #[serde(default)]
    pub disabled_metrics: Vec<String>,
    #[serde(default = "default_max_concurrent_clusters")]
    pub max_concurrent_clusters: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BurrowConfig {
    #[serde(default = "default_burrow_address")]
    pub address: String,
    #[serde(default = "default_api_version")]
    pub api_version: u32,
    /// Per-request timeout; the only timeout applied to Burrow calls.
    #[serde(with = "humantime_serde", default = "default_timeout")]
    pub timeout: Duration,
}

/// Values given on the command line, applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub burrow_address: Option<String>,
    pub burrow_api_version: Option<u32>,
    pub http_port: Option<u16>,
    /// Comma-separated list of metric families to disable.
    pub disabled_metrics: Option<String>,
}

fn default_http_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8237
}

fn default_telemetry_path() -> String {
    "/metrics".to_string()
}

fn default_max_concurrent_clusters() -> usize {
    1
}

fn default_burrow_address() -> String {
    "http://localhost:8000".to_string()
}

fn default_api_version() -> u32 {
    3
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            http_host: default_http_host(),
            http_port: default_http_port(),
            telemetry_path: default_telemetry_path(),
            disabled_metrics: Vec::new(),
            max_concurrent_clusters: default_max_concurrent_clusters(),
        }
    }
}

impl Default for BurrowConfig {
    fn default() -> Self {
        Self {
            address: default_burrow_address(),
            api_version: default_api_version(),
            timeout: default_timeout(),
        }
    }
}

impl Config {
    /// Load from a TOML file, or use defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Config> {
        let Some(config_path) = path else {
            let config = Config::default();
            config.validate()?;
            return Ok(config);
        };

        if !Path::new(config_path).exists() {
            return Err(ExporterError::Config(format!(
                "Configuration file not found: {}",
                config_path
            )));
        }

        let content = std::fs::read_to_string(config_path)?;
        let content = Self::substitute_env_vars(&content)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ExporterError::Config(format!("TOML parse error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        // Supports:
        // - ${VAR} - replaced with env var value, empty string if not set
        // - ${VAR:-default} - replaced with env var value, or "default" if not set
        let re = Regex::new(r"\$\{\??([^}:-]+)(?::-([^}]*))?\}")?;
        Ok(re
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                let default_value = caps.get(2).map(|m| m.as_str()).unwrap_or("");
                std::env::var(var_name).unwrap_or_else(|_| default_value.to_string())
            })
            .to_string())
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Config> {
        if let Some(address) = overrides.burrow_address {
            self.burrow.address = address;
        }
        if let Some(api_version) = overrides.burrow_api_version {
            self.burrow.api_version = api_version;
        }
        if let Some(port) = overrides.http_port {
            self.exporter.http_port = port;
        }
        if let Some(disabled) = overrides.disabled_metrics {
            self.exporter.disabled_metrics = disabled.split(',').map(str::to_string).collect();
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        self.burrow.validate()?;
        self.exporter.validate()
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;

        if !self.telemetry_path.starts_with('/') {
            return Err(ExporterError::Config(format!(
                "telemetry_path must start with '/': {}",
                self.telemetry_path
            )));
        }

        if RESERVED_PATHS.contains(&self.telemetry_path.as_str()) {
            return Err(ExporterError::Config(format!(
                "telemetry_path cannot be one of {}",
                RESERVED_PATHS.join(", ")
            )));
        }

        if self.max_concurrent_clusters == 0 {
            return Err(ExporterError::Config(
                "max_concurrent_clusters must be at least 1".to_string(),
            ));
        }

        self.metric_filter()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.http_host, self.http_port)
            .parse()
            .map_err(|e| {
                ExporterError::Config(format!(
                    "Invalid listen address {}:{}: {}",
                    self.http_host, self.http_port, e
                ))
            })
    }

    pub fn metric_filter(&self) -> Result<MetricFilter> {
        MetricFilter::from_names(&self.disabled_metrics)
    }
}

impl BurrowConfig {
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.address).map_err(|e| {
            ExporterError::Config(format!("Invalid Burrow address '{}': {}", self.address, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ExporterError::Config(format!(
                "Burrow address must use http or https: {}",
                self.address
            )));
        }

        if self.api_version == 0 {
            return Err(ExporterError::Config(
                "api_version must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
