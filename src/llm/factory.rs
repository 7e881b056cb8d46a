use super::gemini::GeminiBackend;
use super::http_client::build_backend_client;
use super::reliable::RetryingBackend;
use super::traits::GenerativeBackend;
use crate::config::Config;
use std::sync::Arc;

/// Build the backend described by `config`.
///
/// The Gemini backend is returned bare unless `reliability.max_retries` is
/// non-zero, in which case it is wrapped in a [`RetryingBackend`].
pub fn create_backend(config: &Config) -> Arc<dyn GenerativeBackend> {
    let client = build_backend_client(config.request_timeout_secs);
    let gemini = GeminiBackend::new(config.api_key.as_deref(), &config.api_base, client);

    if !gemini.has_api_key() {
        tracing::warn!("No Gemini API key configured; every generation call will fail");
    }

    let backend: Arc<dyn GenerativeBackend> = Arc::new(gemini);
    if config.reliability.max_retries == 0 {
        return backend;
    }

    tracing::debug!(
        max_retries = config.reliability.max_retries,
        base_backoff_ms = config.reliability.base_backoff_ms,
        "Wrapping backend with retry decorator"
    );
    Arc::new(RetryingBackend::new(
        backend,
        config.reliability.max_retries,
        config.reliability.base_backoff_ms,
    ))
}
