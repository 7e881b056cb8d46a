pub mod schema;

pub use schema::{
    Config, DEFAULT_API_BASE, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, ReliabilityConfig,
};
