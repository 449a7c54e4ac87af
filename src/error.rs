use thiserror::Error;

/// Errors that can occur while editing or exporting the canvas
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfRange {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for canvas and document operations
pub type PaintResult<T> = Result<T, PaintError>;
