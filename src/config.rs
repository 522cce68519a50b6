use crate::models::{MAX_VERSION, MIN_VERSION};

/// Page title used when none is configured
pub const DEFAULT_TITLE: &str = "QR Code Cheat Sheet";
/// Page description used when none is configured
pub const DEFAULT_DESCRIPTION: &str =
    "Function patterns, mask patterns and codeword layout of QR code versions 1-6.";

fn parse_env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

/// Settings for the cheat sheet page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// `<title>` of the page
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// Highest version column (1-6)
    pub max_version: u8,
    /// Draw the zig-zag turn-around arrows
    pub turn_arrows: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            max_version: MAX_VERSION,
            turn_arrows: true,
        }
    }
}

impl SheetConfig {
    /// Defaults overridden by `QR_SHEET_TITLE`, `QR_SHEET_DESCRIPTION`,
    /// `QR_SHEET_MAX_VERSION` (clamped to 1-6) and `QR_SHEET_TURN_ARROWS` (0/1).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            title: parse_env_string("QR_SHEET_TITLE").unwrap_or(defaults.title),
            description: parse_env_string("QR_SHEET_DESCRIPTION").unwrap_or(defaults.description),
            max_version: parse_env_u8("QR_SHEET_MAX_VERSION", defaults.max_version)
                .clamp(MIN_VERSION, MAX_VERSION),
            turn_arrows: parse_env_bool_u8("QR_SHEET_TURN_ARROWS", defaults.turn_arrows),
        }
    }

    /// Set the highest version column, clamped to 1-6
    pub fn with_max_version(mut self, max_version: u8) -> Self {
        self.max_version = max_version.clamp(MIN_VERSION, MAX_VERSION);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SheetConfig::default();
        assert_eq!(config.title, "QR Code Cheat Sheet");
        assert_eq!(config.max_version, 6);
        assert!(config.turn_arrows);
    }

    #[test]
    fn test_max_version_clamped() {
        assert_eq!(SheetConfig::default().with_max_version(0).max_version, 1);
        assert_eq!(SheetConfig::default().with_max_version(40).max_version, 6);
        assert_eq!(SheetConfig::default().with_max_version(3).max_version, 3);
    }

    #[test]
    fn test_unset_env_falls_back() {
        assert_eq!(parse_env_u8("QR_SHEET_TEST_UNSET_VARIABLE", 4), 4);
        assert!(parse_env_bool_u8("QR_SHEET_TEST_UNSET_VARIABLE", true));
        assert_eq!(parse_env_string("QR_SHEET_TEST_UNSET_VARIABLE"), None);
    }
}
