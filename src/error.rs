use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Burrow request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode Burrow response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Burrow returned an error: {0}")]
    Upstream(String),

    #[error("Burrow responded with unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("HTTP server error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, ExporterError>;
