use thiserror::Error;

/// Errors raised at the crate boundary.
///
/// Rendering itself cannot fail once a [`crate::Version`] and
/// [`crate::MaskPattern`] exist; everything here comes from validating raw
/// numbers or from writing output.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Version outside the drawable range 1-6
    #[error("unsupported QR version {0} (expected 1-6)")]
    InvalidVersion(u8),
    /// Mask index outside 0-7
    #[error("invalid mask index {0} (expected 0-7)")]
    InvalidMask(u8),
    /// Raster scale outside 1-64 pixels per module
    #[error("unsupported raster scale {0} (expected 1-64 pixels per module)")]
    InvalidScale(u32),
    /// Failed to write an output file
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to encode a raster preview
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SheetError>;
