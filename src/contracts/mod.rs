//! Data shapes shared by the orchestration layer and its callers.

pub mod brand;
pub mod chat;
pub mod content;
pub mod design;
pub mod schema;
pub mod sentiment;

pub use brand::{BRAND_NAME_BATCH_SIZE, BrandNameSuggestion, Tone};
pub use chat::{ChatRole, ChatTurn};
pub use content::{ContentKind, MarketingContent};
pub use design::{DesignSystem, FontPairing, PALETTE_SIZE, is_hex_color};
pub use sentiment::{SENTIMENT_REWRITE_COUNT, SentimentResult};
