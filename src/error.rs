use thiserror::Error;

/// Unified error type for release-tree operations
#[derive(Error, Debug)]
pub enum ReleaseTreeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid sentiment rules: {0}")]
    Rules(String),

    #[error("Ingestion error: {0}")]
    Ingest(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-tree
pub type Result<T> = std::result::Result<T, ReleaseTreeError>;

impl ReleaseTreeError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseTreeError::Config(msg.into())
    }

    /// Create a rule validation error with context
    pub fn rules(msg: impl Into<String>) -> Self {
        ReleaseTreeError::Rules(msg.into())
    }

    /// Create an ingestion error with context
    pub fn ingest(msg: impl Into<String>) -> Self {
        ReleaseTreeError::Ingest(msg.into())
    }
}
