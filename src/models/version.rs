use crate::error::{Result, SheetError};

/// Smallest version drawn on the sheet
pub const MIN_VERSION: u8 = 1;
/// Largest version drawn on the sheet (no version information block, one alignment pattern)
pub const MAX_VERSION: u8 = 6;

/// QR code version (1-6, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Validate a version number
    pub fn new(number: u8) -> Result<Self> {
        if (MIN_VERSION..=MAX_VERSION).contains(&number) {
            Ok(Self(number))
        } else {
            Err(SheetError::InvalidVersion(number))
        }
    }

    /// All drawable versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (MIN_VERSION..=MAX_VERSION).map(Version)
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Dark modules along one timing line
    pub fn timing_modules(&self) -> usize {
        2 * self.0 as usize + 1
    }

    /// Whether the symbol carries an alignment pattern
    pub fn has_alignment(&self) -> bool {
        self.0 >= 2
    }
}

impl TryFrom<u8> for Version {
    type Error = SheetError;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
