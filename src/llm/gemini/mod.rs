//! Google Gemini backend over the `generateContent` REST endpoint.
//!
//! Authentication is a plain API key sent in the `x-goog-api-key` header, so
//! the key never appears in request URLs or transport error messages.

use crate::llm::{
    sanitize_api_error,
    traits::GenerativeBackend,
    types::{
        BackendMessage, BackendStatusError, ContentPart, GenerateRequest, GenerateResponse,
        InlineData, MessageRole,
    },
};
use anyhow::Context;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

mod types;
use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, Part,
};

const JSON_MIME_TYPE: &str = "application/json";

/// Gemini backend bound to one API base and key.
pub struct GeminiBackend {
    api_key: Option<String>,
    api_base: String,
    client: Client,
}

impl GeminiBackend {
    pub fn new(api_key: Option<&str>, api_base: &str, client: Client) -> Self {
        Self {
            api_key: api_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(String::from),
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> anyhow::Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Gemini API key not found. Options:\n\
                 1. Set GEMINI_API_KEY (or BRANDPULSE_API_KEY) env var\n\
                 2. Add api_key to ~/.brandpulse/config.toml\n\
                 3. Get an API key from https://aistudio.google.com/app/apikey"
            )
        })
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_base,
            Self::model_name(model)
        )
    }

    fn map_message(message: &BackendMessage) -> Content {
        let role = match message.role {
            MessageRole::User => "user",
            MessageRole::Model => "model",
        };
        Content {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: message.text.clone(),
            }],
        }
    }

    fn build_request(request: &GenerateRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: request.contents.iter().map(Self::map_message).collect(),
            system_instruction: request.system_instruction.as_ref().map(|system| Content {
                role: None,
                parts: vec![Part {
                    text: system.clone(),
                }],
            }),
            generation_config: GenerationConfig {
                response_mime_type: request
                    .response_schema
                    .as_ref()
                    .map(|_| JSON_MIME_TYPE.to_string()),
                response_schema: request.response_schema.clone(),
                image_config: request.aspect_ratio.as_ref().map(|ratio| ImageConfig {
                    aspect_ratio: ratio.clone(),
                }),
            },
        }
    }

    /// First candidate's parts, minus thought summaries and empty text.
    fn parse_parts(candidate: &Candidate) -> Vec<ContentPart> {
        let Some(content) = candidate.content.as_ref() else {
            return Vec::new();
        };

        let mut parts = Vec::new();
        for part in content.parts.iter().filter(|part| !part.thought) {
            if let Some(text) = part.text.as_ref().filter(|t| !t.is_empty()) {
                parts.push(ContentPart::Text { text: text.clone() });
            }
            if let Some(inline) = &part.inline_data {
                parts.push(ContentPart::InlineData {
                    inline_data: InlineData {
                        mime_type: inline.mime_type.clone(),
                        data: inline.data.clone(),
                    },
                });
            }
        }
        parts
    }

    fn into_response(result: GenerateContentResponse) -> GenerateResponse {
        let first = result
            .candidates
            .as_ref()
            .and_then(|candidates| candidates.first());

        if let Some(reason) = first.and_then(|c| c.finish_reason.as_deref())
            && reason != "STOP"
        {
            tracing::debug!(finish_reason = reason, "Gemini candidate finished early");
        }

        GenerateResponse {
            parts: first.map(Self::parse_parts).unwrap_or_default(),
            model_version: result.model_version,
        }
    }

    async fn call_api(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let api_key = self.api_key()?;
        let body = Self::build_request(request);

        tracing::debug!(
            model = request.model.as_str(),
            turns = body.contents.len(),
            structured = request.response_schema.is_some(),
            "Sending Gemini generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(BackendStatusError {
                backend: "Gemini",
                status,
                body: sanitize_api_error(&error_text),
            }
            .into());
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .context("Gemini response body was not valid JSON")?;

        if let Some(err) = result.error.as_ref() {
            anyhow::bail!("Gemini API error: {}", sanitize_api_error(&err.message));
        }

        Ok(Self::into_response(result))
    }
}

impl GenerativeBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate_content<'a>(
        &'a self,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<GenerateResponse>> + Send + 'a>> {
        Box::pin(self.call_api(request))
    }
}
