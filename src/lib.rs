//! QR Code Cheat Sheet - annotated QR module grids as SVG
//!
//! Draws the module grid of QR versions 1-6 under each of the 8 mask
//! patterns, with function patterns, mask and format information, codeword
//! boundaries and the zig-zag scan order marked, plus a legend tile per mask.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Page settings (defaults and `QR_SHEET_*` environment overrides)
pub mod config;
/// Error type for validation and output
pub mod error;
/// Module-grid construction (function patterns, codeword numbering, borders)
pub mod layout;
/// Core data structures (Version, MaskPattern, BitMatrix, Point)
pub mod models;
/// HTML page assembly
pub mod page;
/// PNG preview of a module grid
pub mod raster;
/// Drawing primitives, grid and tile renderers, SVG output
pub mod render;

pub use config::SheetConfig;
pub use error::{Result, SheetError};
pub use layout::GridLayout;
pub use models::{BitMatrix, MaskPattern, Point, Version};
pub use page::render_page;
pub use render::{GridRenderer, Primitive, Shape, Style, render_grid, render_mask_tile};

/// Render one grid diagram as a standalone SVG document
///
/// # Example
/// ```
/// use qr_cheatsheet::{MaskPattern, Version, grid_document};
///
/// let version = Version::new(1).unwrap();
/// let svg = grid_document(version, MaskPattern::Pattern0, true);
/// assert!(svg.contains(r#"viewBox="-1 -1 23 23""#));
/// ```
pub fn grid_document(version: Version, mask: MaskPattern, turn_arrows: bool) -> String {
    let primitives = GridRenderer::new(version, mask)
        .with_turn_arrows(turn_arrows)
        .render();
    render::svg::grid_svg(&primitives, version.size(), true)
}

/// Render one mask tile legend as a standalone SVG document
pub fn tile_document(mask: MaskPattern) -> String {
    render::svg::tile_svg(&render_mask_tile(mask), true)
}
