#[derive(Debug, thiserror::Error)]
pub enum BoatRaceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write token is missing")]
    MissingToken,

    #[error("Offline mode is enabled: {0}")]
    Offline(String),

    #[error("Malformed payload: {0}")]
    Payload(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, BoatRaceError>;
