use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Structured-output schema ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    String,
    Number,
    Array,
    Object,
}

/// Response-shape declaration handed to the backend alongside a prompt.
///
/// Serializes to the OpenAPI subset the Gemini API accepts as
/// `generationConfig.responseSchema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ResponseSchema {
    fn leaf(kind: SchemaType) -> Self {
        Self {
            kind,
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::leaf(SchemaType::Number)
    }

    pub fn array(items: ResponseSchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    /// Object whose listed properties are all required.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, ResponseSchema)>,
        K: Into<String>,
    {
        let properties: BTreeMap<String, ResponseSchema> = properties
            .into_iter()
            .map(|(name, schema)| (name.into(), schema))
            .collect();
        let required = properties.keys().cloned().collect();
        Self {
            properties,
            required,
            ..Self::leaf(SchemaType::Object)
        }
    }

    pub fn property(&self, name: &str) -> Option<&ResponseSchema> {
        self.properties.get(name)
    }
}

// ── Request ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendMessage {
    pub role: MessageRole,
    pub text: String,
}

impl BackendMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Model,
            text: text.into(),
        }
    }
}

/// One content-generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub contents: Vec<BackendMessage>,
    /// When set, the backend is asked for `application/json` in this shape.
    pub response_schema: Option<ResponseSchema>,
    /// Image models only, e.g. `"1:1"`.
    pub aspect_ratio: Option<String>,
}

impl GenerateRequest {
    /// Single user prompt, no system instruction.
    pub fn prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: None,
            contents: vec![BackendMessage::user(prompt)],
            response_schema: None,
            aspect_ratio: None,
        }
    }

    /// Multi-turn continuation: persona plus full turn history.
    pub fn conversation(
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        contents: Vec<BackendMessage>,
    ) -> Self {
        Self {
            model: model.into(),
            system_instruction: Some(system_instruction.into()),
            contents,
            response_schema: None,
            aspect_ratio: None,
        }
    }

    pub fn with_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_aspect_ratio(mut self, ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(ratio.into());
        self
    }
}

// ── Response ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    pub mime_type: String,
    /// Base64-encoded payload exactly as the backend sent it.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub parts: Vec<ContentPart>,
    pub model_version: Option<String>,
}

impl GenerateResponse {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            parts: vec![ContentPart::Text { text: text.into() }],
            model_version: None,
        }
    }

    pub fn from_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            parts,
            model_version: None,
        }
    }

    /// Concatenation of every text part, in order.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                ContentPart::InlineData { .. } => None,
            })
            .collect()
    }

    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.parts.iter().find_map(|part| match part {
            ContentPart::InlineData { inline_data } => Some(inline_data),
            ContentPart::Text { .. } => None,
        })
    }
}

// ── Errors ──────────────────────────────────────────────────────────────────

/// A backend answered with a non-success HTTP status.
///
/// `body` is already scrubbed of secrets and length-capped.
#[derive(Debug, thiserror::Error)]
#[error("{backend} API error ({status}): {body}")]
pub struct BackendStatusError {
    pub backend: &'static str,
    pub status: reqwest::StatusCode,
    pub body: String,
}
