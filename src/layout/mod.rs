//! Module-grid construction
//!
//! Builds the two matrices a grid diagram is drawn from:
//! - the mask-applied module matrix, with function patterns carved out
//! - the byte-ownership matrix, numbered in zig-zag scan order

/// Border segments between codeword regions
pub mod borders;
/// Byte-ownership grid and codeword numbering
pub mod codewords;
/// Function module mask (finder/timing/alignment)
pub mod function_mask;

use crate::models::{BitMatrix, MaskPattern, Version};
use codewords::ByteGrid;
use function_mask::FunctionMask;

/// Both matrices for one (version, mask) pair
#[derive(Debug, Clone)]
pub struct GridLayout {
    modules: BitMatrix,
    bytes: ByteGrid,
}

impl GridLayout {
    /// Evaluate the mask, carve out function patterns and number the codewords
    pub fn build(version: Version, mask: MaskPattern) -> Self {
        let func = FunctionMask::new(version);
        let size = func.size();

        let mut modules = BitMatrix::square(size);
        for y in 0..size {
            for x in 0..size {
                if mask.is_dark(x, y) && !func.is_function(x, y) {
                    modules.set(x, y, true);
                }
            }
        }

        let mut bytes = ByteGrid::from_function_mask(&func);
        bytes.mark_terminator();
        let assigned = bytes.assign_codewords();

        log::debug!(
            "layout v{} mask {}: {} dark modules, {} numbered modules",
            version,
            mask,
            modules.count_ones(),
            assigned
        );

        Self { modules, bytes }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Mask-applied module matrix
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Byte-ownership matrix
    pub fn bytes(&self) -> &ByteGrid {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codewords::ByteCell;

    #[test]
    fn test_function_regions_never_masked_or_numbered() {
        for version in Version::all() {
            let func = FunctionMask::new(version);
            for mask in MaskPattern::ALL {
                let layout = GridLayout::build(version, mask);
                let size = layout.size();
                for y in 0..size {
                    for x in 0..size {
                        if func.is_function(x, y) {
                            assert!(!layout.modules().get(x, y));
                            assert_eq!(layout.bytes().get(x as isize, y as isize), ByteCell::Reserved);
                        } else {
                            assert_eq!(layout.modules().get(x, y), mask.is_dark(x, y));
                            assert_ne!(layout.bytes().get(x as isize, y as isize), ByteCell::Reserved);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_version_two_mask_five() {
        let layout = GridLayout::build(Version::new(2).unwrap(), MaskPattern::Pattern5);
        assert_eq!(layout.size(), 25);
        for y in 16..=20usize {
            for x in 16..=20usize {
                assert!(!layout.modules().get(x, y));
                assert_eq!(layout.bytes().get(x as isize, y as isize), ByteCell::Reserved);
            }
        }
        // (y + x) % 2 == 0 outside reserved areas
        assert!(layout.modules().get(10, 10));
        assert!(!layout.modules().get(11, 10));
        assert!(layout.modules().get(15, 21));
    }

    #[test]
    fn test_byte_grid_independent_of_mask() {
        let version = Version::new(3).unwrap();
        let reference = GridLayout::build(version, MaskPattern::Pattern0);
        for mask in MaskPattern::ALL {
            assert_eq!(GridLayout::build(version, mask).bytes(), reference.bytes());
        }
    }
}
