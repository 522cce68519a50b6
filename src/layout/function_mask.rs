use crate::models::{BitMatrix, Version};

/// Function module mask for a drawable QR version.
/// true = function module (finder, separator, format, timing, alignment), false = data module.
pub struct FunctionMask {
    mask: BitMatrix,
}

impl FunctionMask {
    /// Carve out every function pattern of `version`
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut mask = BitMatrix::square(size);

        // Finder patterns with separators and the format strip next to them
        for (x, y, width, height) in finder_blocks(size) {
            mask.fill_rect(x, y, width, height, true);
        }

        // Timing patterns (row 6 and column 6) between the finder blocks
        for i in 8..size - 8 {
            mask.set(i, 6, true);
            mask.set(6, i, true);
        }

        // Single alignment pattern, carved after timing
        if let Some((x, y)) = alignment_origin(version) {
            mask.fill_rect(x, y, 5, 5, true);
        }

        Self { mask }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// Whether (x, y) belongs to a function pattern
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Modules left for data and remainder bits
    pub fn data_modules_count(&self) -> usize {
        self.size() * self.size() - self.mask.count_ones()
    }
}

/// Finder corner blocks as (x, y, width, height): top-left, top-right, bottom-left
pub fn finder_blocks(size: usize) -> [(usize, usize, usize, usize); 3] {
    [(0, 0, 9, 9), (size - 8, 0, 8, 9), (0, size - 8, 9, 8)]
}

/// Top-left corner of the 5x5 alignment block, if the version has one.
///
/// Versions 2-6 have exactly one alignment pattern, centered at (size-7, size-7).
pub fn alignment_origin(version: Version) -> Option<(usize, usize)> {
    if !version.has_alignment() {
        return None;
    }
    let size = version.size();
    Some((size - 9, size - 9))
}
