//! Error handling for RTL text processing

/// Errors produced by the RTL core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RtlError {
    #[error("Text is empty after trimming whitespace")]
    EmptyText,

    #[error("Internal processing error: {0}")]
    ProcessingError(String),

    #[error("Direction detection failed: {0}")]
    DirectionDetectionFailed(String),

    #[error("Bidirectional text processing failed: {0}")]
    BidiProcessingFailed(String),

    #[error("Layout adaptation failed: {0}")]
    LayoutAdaptationFailed(String),

    #[error("Cultural formatting failed: {0}")]
    CulturalFormattingFailed(String),

    #[error("Image mirroring failed: {0}")]
    ImageMirroringFailed(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<serde_json::Error> for RtlError {
    fn from(err: serde_json::Error) -> Self {
        RtlError::ConfigurationError(err.to_string())
    }
}

impl From<image::ImageError> for RtlError {
    fn from(err: image::ImageError) -> Self {
        RtlError::ImageMirroringFailed(err.to_string())
    }
}

/// Result type for RTL core operations
pub type RtlResult<T> = Result<T, RtlError>;
