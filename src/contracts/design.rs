use serde::{Deserialize, Serialize};

/// Number of swatches requested per design system.
pub const PALETTE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPairing {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSystem {
    /// Ordered swatches, expected as `#RRGGBB`.
    pub palette: Vec<String>,
    pub fonts: FontPairing,
    pub description: String,
}

impl DesignSystem {
    /// Palette entries that are not `#` followed by six hex digits.
    pub fn invalid_swatches(&self) -> Vec<&str> {
        self.palette
            .iter()
            .map(String::as_str)
            .filter(|swatch| !is_hex_color(swatch))
            .collect()
    }
}

pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}
