use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("feature encoding error: {0}")]
    Encoding(String),

    #[error("model returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("model API error: status={status}, body={body}")]
    Api { status: u16, body: String },
}
