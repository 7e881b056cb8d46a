use super::traits::GenerativeBackend;
use super::types::{BackendStatusError, GenerateRequest, GenerateResponse};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

const MAX_BACKOFF_MS: u64 = 10_000;

/// Status code named by an error, if any.
///
/// Typed errors are preferred. For plain messages only the status right after
/// the `API error (` prefix counts; numbers in the error body are ignored.
fn error_status(err: &anyhow::Error) -> Option<u16> {
    if let Some(status) = err.chain().find_map(|cause| {
        cause
            .downcast_ref::<BackendStatusError>()
            .map(|e| e.status)
            .or_else(|| cause.downcast_ref::<reqwest::Error>()?.status())
    }) {
        return Some(status.as_u16());
    }

    let msg = err.to_string();
    let (_, rest) = msg.split_once("API error (")?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Check if an error is non-retryable (client errors that won't resolve with retries).
fn is_non_retryable(err: &anyhow::Error) -> bool {
    let msg = err.to_string();
    if is_quota_exhausted(&msg) || msg.contains("API key not found") {
        return true;
    }

    // 408 Request Timeout and 429 Too Many Requests are transient.
    error_status(err).is_some_and(|code| (400..500).contains(&code) && code != 408 && code != 429)
}

fn is_quota_exhausted(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    (lower.contains("resource_exhausted") && lower.contains("quota"))
        || lower.contains("exceeded your current quota")
        || lower.contains("billing")
}

/// Optional decorator adding bounded retries with exponential backoff.
///
/// The orchestration layer itself is single-attempt; resilience is opted into
/// by wrapping the backend, never by looping inside an operation.
pub struct RetryingBackend {
    inner: Arc<dyn GenerativeBackend>,
    max_retries: u32,
    base_backoff_ms: u64,
}

impl RetryingBackend {
    pub fn new(inner: Arc<dyn GenerativeBackend>, max_retries: u32, base_backoff_ms: u64) -> Self {
        Self {
            inner,
            max_retries,
            base_backoff_ms: base_backoff_ms.max(50),
        }
    }

    async fn generate_with_retries(
        &self,
        request: &GenerateRequest,
    ) -> anyhow::Result<GenerateResponse> {
        let backend = self.inner.name().to_string();
        let mut backoff_ms = self.base_backoff_ms;
        let mut attempt = 0;

        loop {
            match self.inner.generate_content(request).await {
                Ok(response) => {
                    if attempt > 0 {
                        tracing::info!(
                            backend = backend.as_str(),
                            attempt,
                            "Backend recovered after retries"
                        );
                    }
                    return Ok(response);
                }
                Err(e) => {
                    if is_non_retryable(&e) {
                        tracing::warn!(backend = backend.as_str(), "Non-retryable error: {e}");
                        return Err(e);
                    }
                    if attempt >= self.max_retries {
                        return Err(e.context(format!(
                            "{backend} failed after {} attempt(s)",
                            attempt + 1
                        )));
                    }

                    attempt += 1;
                    tracing::warn!(
                        backend = backend.as_str(),
                        attempt,
                        max_retries = self.max_retries,
                        "Backend call failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms = backoff_ms.saturating_mul(2).min(MAX_BACKOFF_MS);
                }
            }
        }
    }
}

impl GenerativeBackend for RetryingBackend {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn generate_content<'a>(
        &'a self,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<GenerateResponse>> + Send + 'a>> {
        Box::pin(self.generate_with_retries(request))
    }
}
