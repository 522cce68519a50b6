use crate::error::{Result, SheetError};

/// Format-information mask applied to the mask bits (ISO 18004 `101`)
const FORMAT_MASK: u8 = 0b101;

/// Mask pattern (0-7) as stored in the symbol before the format information is unmasked.
///
/// The predicate takes the column `x` and row `y`. [`MaskPattern::reference`]
/// gives the mask pattern reference after unmasking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (y*x)%2 + (y*x)%3 == 0
    Pattern0 = 0,
    /// (y/2 + x/3) % 2 == 0
    Pattern1 = 1,
    /// ((y+x)%2 + (y*x)%3) % 2 == 0
    Pattern2 = 2,
    /// ((y*x)%2 + (y*x)%3) % 2 == 0
    Pattern3 = 3,
    /// y % 2 == 0
    Pattern4 = 4,
    /// (y+x) % 2 == 0
    Pattern5 = 5,
    /// (y+x) % 3 == 0
    Pattern6 = 6,
    /// x % 3 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from an index, rejecting anything above 7
    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(SheetError::InvalidMask(index))
    }

    /// Mask index (0-7)
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Mask pattern reference once the format information is unmasked
    pub fn reference(&self) -> u8 {
        self.index() ^ FORMAT_MASK
    }

    /// Index bits, most significant first
    pub fn bits(&self) -> [bool; 3] {
        let index = self.index();
        [index & 0b100 != 0, index & 0b010 != 0, index & 0b001 != 0]
    }

    /// Check if module at column `x`, row `y` is set by this mask
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (y * x) % 2 + (y * x) % 3 == 0,
            MaskPattern::Pattern1 => (y / 2 + x / 3) % 2 == 0,
            MaskPattern::Pattern2 => ((y + x) % 2 + (y * x) % 3) % 2 == 0,
            MaskPattern::Pattern3 => ((y * x) % 2 + (y * x) % 3) % 2 == 0,
            MaskPattern::Pattern4 => y % 2 == 0,
            MaskPattern::Pattern5 => (y + x) % 2 == 0,
            MaskPattern::Pattern6 => (y + x) % 3 == 0,
            MaskPattern::Pattern7 => x % 3 == 0,
        }
    }

    /// Horizontal repeat period used for the tile legend and grid markers
    pub fn repeat_x(&self) -> usize {
        6
    }

    /// Vertical repeat period used for the tile legend and grid markers
    pub fn repeat_y(&self) -> usize {
        match self {
            MaskPattern::Pattern1 => 4,
            _ => 6,
        }
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = SheetError;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index)
    }
}

impl std::fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}
