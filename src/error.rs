#[derive(Debug, thiserror::Error)]
pub enum DgkalaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON decode error for {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("required field missing or mistyped: {path}")]
    MissingField { path: &'static str },

    #[error("background task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, DgkalaError>;
