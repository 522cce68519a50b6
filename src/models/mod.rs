/// Mask patterns 0-7
pub mod mask;
/// Packed bit matrix
pub mod matrix;
/// Point in module units
pub mod point;
/// QR versions 1-6
pub mod version;

pub use mask::MaskPattern;
pub use matrix::BitMatrix;
pub use point::Point;
pub use version::{MAX_VERSION, MIN_VERSION, Version};
