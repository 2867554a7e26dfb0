use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown series type: {0:?}")]
    InvalidSeriesType(String),

    #[error("invalid asset source: {0}")]
    InvalidAssetSource(String),

    #[error("invalid script location: {0:?} (expected \"head\" or \"end\")")]
    InvalidScriptLocation(String),

    #[error("invalid options payload: {0}")]
    InvalidOptions(String),

    /// Reserved for placeholder tokens colliding with document text during
    /// serialization. Tokens are 32-hex uuid values, so a collision is
    /// vanishingly unlikely and is not currently detected.
    #[error("placeholder token collided with document text: {0}")]
    PlaceholderCollision(String),

    #[error("failed to write chart html: {0}")]
    Io(#[from] std::io::Error),
}
