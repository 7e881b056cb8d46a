use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Number of suggestions requested per name-generation call.
pub const BRAND_NAME_BATCH_SIZE: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandNameSuggestion {
    pub name: String,
    pub tagline: String,
}

/// Voice the generated names should carry.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Tone {
    #[default]
    Modern,
    Luxury,
    Playful,
    Minimalist,
    Corporate,
}
