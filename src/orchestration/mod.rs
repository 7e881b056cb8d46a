//! Prompt orchestration: user fields in, validated contract types out.
//!
//! Every operation is a single stateless attempt against the backend. Backend
//! failures surface as [`BrandError::Upstream`]; payloads that do not decode
//! into the declared shape surface as [`BrandError::MalformedResponse`]; empty
//! required input is rejected with [`BrandError::PreconditionViolation`]
//! before any request is issued.

pub mod parse;
pub mod prompts;

use crate::chat::ChatSession;
use crate::config::{Config, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use crate::contracts::{
    BRAND_NAME_BATCH_SIZE, BrandNameSuggestion, ContentKind, DesignSystem, SentimentResult, Tone,
    schema,
};
use crate::error::BrandError;
use crate::llm::{GenerateRequest, GenerateResponse, GenerativeBackend};
use std::sync::Arc;

const LOGO_MIME_TYPE: &str = "image/png";

/// Model identifiers used for text and image calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub text: String,
    pub image: String,
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT_MODEL.into(),
            image: DEFAULT_IMAGE_MODEL.into(),
        }
    }
}

impl ModelSelection {
    pub fn from_config(config: &Config) -> Self {
        Self {
            text: config.text_model.clone(),
            image: config.image_model.clone(),
        }
    }
}

fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, BrandError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BrandError::precondition(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

/// Front door for the five one-shot branding operations.
#[derive(Clone)]
pub struct BrandService {
    backend: Arc<dyn GenerativeBackend>,
    models: ModelSelection,
}

impl BrandService {
    pub fn new(backend: Arc<dyn GenerativeBackend>, models: ModelSelection) -> Self {
        Self { backend, models }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            crate::llm::create_backend(config),
            ModelSelection::from_config(config),
        )
    }

    pub fn models(&self) -> &ModelSelection {
        &self.models
    }

    /// Open a fresh consultant conversation on the text model.
    pub fn start_chat(&self) -> ChatSession {
        ChatSession::start(Arc::clone(&self.backend), self.models.text.clone())
    }

    async fn call(&self, request: GenerateRequest) -> Result<GenerateResponse, BrandError> {
        self.backend
            .generate_content(&request)
            .await
            .map_err(BrandError::Upstream)
    }

    pub async fn generate_brand_names(
        &self,
        industry: &str,
        keywords: &str,
        tone: Tone,
    ) -> Result<Vec<BrandNameSuggestion>, BrandError> {
        let industry = require_non_empty("industry", industry)?;
        let keywords = require_non_empty("keywords", keywords)?;
        tracing::debug!(industry, %tone, "Generating brand names");

        let request = GenerateRequest::prompt(
            &self.models.text,
            prompts::brand_names_prompt(industry, keywords, tone),
        )
        .with_schema(schema::brand_names_schema());
        let response = self.call(request).await?;

        let suggestions: Vec<BrandNameSuggestion> =
            parse::parse_structured(&response.text(), "[]", "brand name list")?;
        parse::validate_suggestions(&suggestions)?;

        if suggestions.len() != BRAND_NAME_BATCH_SIZE {
            tracing::warn!(
                expected = BRAND_NAME_BATCH_SIZE,
                received = suggestions.len(),
                "Backend returned an unexpected number of brand names"
            );
        }
        Ok(suggestions)
    }

    pub async fn generate_marketing_content(
        &self,
        kind: ContentKind,
        brand_name: &str,
        brand_details: &str,
    ) -> Result<String, BrandError> {
        let brand_name = require_non_empty("brand name", brand_name)?;
        let brand_details = require_non_empty("brand details", brand_details)?;
        tracing::debug!(%kind, brand_name, "Generating marketing content");

        let request = GenerateRequest::prompt(
            &self.models.text,
            prompts::marketing_prompt(kind, brand_name, brand_details),
        );
        Ok(self.call(request).await?.text())
    }

    /// Returns a `data:image/png;base64,...` URI, or `None` when the backend
    /// answered without an image part.
    pub async fn generate_logo(&self, description: &str) -> Result<Option<String>, BrandError> {
        let description = require_non_empty("logo description", description)?;
        tracing::debug!("Generating logo");

        let request =
            GenerateRequest::prompt(&self.models.image, prompts::logo_prompt(description))
                .with_aspect_ratio(prompts::LOGO_ASPECT_RATIO);
        let response = self.call(request).await?;

        let Some(image) = response.first_inline_data() else {
            tracing::warn!("Logo response carried no image part");
            return Ok(None);
        };
        Ok(Some(format!("data:{LOGO_MIME_TYPE};base64,{}", image.data)))
    }

    /// `score` is passed through unclamped; out-of-range values are logged.
    pub async fn analyze_sentiment(&self, reviews: &str) -> Result<SentimentResult, BrandError> {
        let reviews = require_non_empty("reviews", reviews)?;
        tracing::debug!(chars = reviews.len(), "Analyzing sentiment");

        let request =
            GenerateRequest::prompt(&self.models.text, prompts::sentiment_prompt(reviews))
                .with_schema(schema::sentiment_schema());
        let response = self.call(request).await?;

        let result: SentimentResult =
            parse::parse_structured(&response.text(), "{}", "sentiment analysis")?;
        if !result.score_in_range() {
            tracing::warn!(
                score = result.score,
                "Sentiment score outside [0, 1]; passing through unchanged"
            );
        }
        Ok(result)
    }

    /// Palette entries are returned in backend order without hex validation.
    pub async fn generate_design_system(
        &self,
        personality: &str,
    ) -> Result<DesignSystem, BrandError> {
        let personality = require_non_empty("brand personality", personality)?;
        tracing::debug!("Generating design system");

        let request = GenerateRequest::prompt(
            &self.models.text,
            prompts::design_system_prompt(personality),
        )
        .with_schema(schema::design_system_schema());
        let response = self.call(request).await?;

        parse::parse_structured(&response.text(), "{}", "design system")
    }
}
