use thiserror::Error;

/// Why a chat question could not be answered.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("tutor responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("triangle is degenerate, angles are undefined")]
    DegenerateTriangle,
}
