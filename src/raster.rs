//! Raster preview of a module grid
//!
//! Only the mask-applied modules are drawn; annotations stay vector-only.

use crate::error::{Result, SheetError};
use crate::layout::GridLayout;
use image::{GrayImage, Luma};
use std::path::Path;

const DARK: u8 = 0;
const LIGHT: u8 = 255;
/// Quiet zone in modules, matching the SVG view box margin
const QUIET_ZONE: u32 = 1;
/// Largest accepted pixels-per-module
pub const MAX_SCALE: u32 = 64;

/// Render the module grid at `scale` pixels per module
pub fn module_image(layout: &GridLayout, scale: u32) -> Result<GrayImage> {
    if !(1..=MAX_SCALE).contains(&scale) {
        return Err(SheetError::InvalidScale(scale));
    }
    let side = u32::try_from(layout.size())
        .ok()
        .and_then(|size| size.checked_add(2 * QUIET_ZONE))
        .and_then(|modules| modules.checked_mul(scale))
        .ok_or(SheetError::InvalidScale(scale))?;
    let modules = layout.modules();
    Ok(GrayImage::from_fn(side, side, |px, py| {
        let mx = (px / scale) as i64 - QUIET_ZONE as i64;
        let my = (py / scale) as i64 - QUIET_ZONE as i64;
        if mx >= 0 && my >= 0 && modules.get(mx as usize, my as usize) {
            Luma([DARK])
        } else {
            Luma([LIGHT])
        }
    }))
}

/// Render and save as PNG (format chosen from the extension)
pub fn save_module_image(layout: &GridLayout, scale: u32, path: &Path) -> Result<()> {
    let img = module_image(layout, scale)?;
    img.save(path)?;
    log::info!(
        "wrote {}x{} preview to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}
