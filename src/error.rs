use thiserror::Error;

#[derive(Error, Debug)]
pub enum AqiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {message}")]
    Api { message: String },
}

pub type Result<T> = std::result::Result<T, AqiError>;

/// Per-location fetch failure. These never escalate to a run failure: the
/// collector logs them and drops the row.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed returned HTTP {0}")]
    HttpStatus(u16),

    #[error("feed rejected the query: {message}")]
    Feed { message: String },

    #[error("missing field in feed body: {0}")]
    MissingField(&'static str),
}
