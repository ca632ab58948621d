use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsdeskError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("News API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl NewsdeskError {
    /// Errors that abort a fetch attempt: network, non-success status, bad body.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            NewsdeskError::Http(_) | NewsdeskError::Status { .. } | NewsdeskError::Decode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NewsdeskError>;
