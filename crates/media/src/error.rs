use thiserror::Error;

pub type Result<T> = std::result::Result<T, MediaError>;

/// Errors surfaced by the media layer.
///
/// Autoplay rejection is expected on hosts that require a user gesture; it is
/// caught and logged at the session boundary and never escalated.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("autoplay rejected: {0}")]
    AutoplayRejected(String),

    #[error("invalid session config: {0}")]
    Config(#[from] serde_json::Error),
}
