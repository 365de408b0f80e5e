use reqwest::StatusCode;

// Only failures of the page fetch abort an audit.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} for url: {url}")]
    Status { status: StatusCode, url: String },
}
