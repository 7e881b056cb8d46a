use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    pub api_key: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Whole-request timeout. Unset leaves requests bounded only by the
    /// transport's own connect timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub reliability: ReliabilityConfig,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.into()
}

fn default_text_model() -> String {
    DEFAULT_TEXT_MODEL.into()
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            api_base: default_api_base(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            request_timeout_secs: None,
            reliability: ReliabilityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliabilityConfig {
    /// Extra attempts after the first. Zero keeps single-attempt semantics.
    #[serde(default)]
    pub max_retries: u32,
    #[serde(default = "default_base_backoff_ms")]
    pub base_backoff_ms: u64,
}

fn default_base_backoff_ms() -> u64 {
    500
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_backoff_ms: default_base_backoff_ms(),
        }
    }
}
