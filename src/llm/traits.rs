use super::types::{GenerateRequest, GenerateResponse};
use std::future::Future;
use std::pin::Pin;

/// The external generative model, seen as a request/response collaborator.
///
/// Implementations hold no conversation state: multi-turn exchanges send the
/// persona and the whole history with every request.
pub trait GenerativeBackend: Send + Sync {
    /// Backend identifier (e.g. "gemini").
    fn name(&self) -> &str;

    fn generate_content<'a>(
        &'a self,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<GenerateResponse>> + Send + 'a>>;
}
