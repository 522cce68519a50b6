//! Diagram rendering
//!
//! Turns a grid layout or a mask into an ordered list of styled primitives,
//! and serializes primitive lists into SVG.

/// Annotated module grid for one (version, mask) pair
pub mod grid;
/// Styled drawing primitives
pub mod primitive;
/// SVG serialization and stylesheet
pub mod svg;
/// Mask repeat tile legend
pub mod tile;

pub use grid::{GridRenderer, render_grid};
pub use primitive::{Primitive, Shape, Style};
pub use tile::render_mask_tile;
