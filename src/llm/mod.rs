// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod scrub;
pub mod traits;
pub mod types;

// ── Decorator layers ────────────────────────────────────────────────────────
pub mod factory;
pub mod reliable;

// ── Backend implementations ─────────────────────────────────────────────────
pub mod gemini;

pub use factory::create_backend;
pub use gemini::GeminiBackend;
pub use http_client::build_backend_client;
pub use reliable::RetryingBackend;
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::GenerativeBackend;
pub use types::{
    BackendMessage, BackendStatusError, ContentPart, GenerateRequest, GenerateResponse,
    InlineData, MessageRole, ResponseSchema, SchemaType,
};
