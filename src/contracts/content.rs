use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which marketing template to fill.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentKind {
    /// Product description, about 200 words.
    #[default]
    Description,
    /// Five social captions with hashtags.
    Social,
    /// Three ad copies, headline plus body.
    Ads,
}

/// Free-form copy produced for one [`ContentKind`]. Replaced on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingContent {
    pub kind: ContentKind,
    pub text: String,
}
