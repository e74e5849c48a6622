use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("GitHub responded with HTTP {0}")]
    Status(u16),

    #[error("Could not decode GitHub response: {0}")]
    Decode(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBase(String),
}
