use thiserror::Error;

/// Error type for dictionary loading, boundary parsing and remote classification.
///
/// Classification itself never fails; these only surface around it.
#[derive(Debug, Error)]
pub enum CategorizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid keyword dictionary: {0}")]
    InvalidDictionary(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Remote classifier unavailable: {0}")]
    RemoteUnavailable(String),
}
