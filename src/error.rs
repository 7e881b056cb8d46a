use thiserror::Error;

// ─── Orchestration errors ────────────────────────────────────────────────────

/// Failures surfaced at the orchestration boundary.
///
/// Every backend failure collapses to one of these three kinds. Callers match
/// on them to decide messaging; none of them is fatal to the process and a
/// tool stays usable after any of them.
#[derive(Debug, Error)]
pub enum BrandError {
    /// The backend call could not complete (network, auth, quota).
    #[error("upstream request failed: {0:#}")]
    Upstream(anyhow::Error),

    /// The call completed but the payload does not match the declared schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The caller passed empty or invalid input.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

impl BrandError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse(detail.into())
    }

    pub fn precondition(detail: impl Into<String>) -> Self {
        Self::PreconditionViolation(detail.into())
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::PreconditionViolation(_))
    }
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
