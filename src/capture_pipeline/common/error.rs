use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Malformed capture: expected {expected} samples, got {actual}")]
    FormatError { expected: usize, actual: usize },

    #[error("Unsupported capture format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read capture: {0}")]
    SourceError(String),

    #[error("Failed to export image: {0}")]
    ExportError(String),

    #[error("Failed to display image: {0}")]
    DisplayError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
