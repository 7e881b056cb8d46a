#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use brandpulse::llm::{ContentPart, GenerateRequest, GenerateResponse, GenerativeBackend, InlineData};

/// Backend that replays queued outcomes and records every request it saw.
#[derive(Default)]
pub struct ScriptedBackend {
    outcomes: Mutex<VecDeque<Result<GenerateResponse>>>,
    seen: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedBackend {
    pub fn new(outcomes: Vec<Result<GenerateResponse>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(VecDeque::from(outcomes)),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(texts: &[&str]) -> Arc<Self> {
        Self::new(
            texts
                .iter()
                .map(|text| Ok(GenerateResponse::text_only(*text)))
                .collect(),
        )
    }

    pub fn push(&self, outcome: Result<GenerateResponse>) {
        self.outcomes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(outcome);
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.seen
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

impl GenerativeBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    fn generate_content<'a>(
        &'a self,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerateResponse>> + Send + 'a>> {
        self.seen
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(request.clone());
        let next = self
            .outcomes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("no scripted outcome left")));
        Box::pin(async move { next })
    }
}

pub fn image_response(data: &str) -> GenerateResponse {
    GenerateResponse::from_parts(vec![
        ContentPart::Text {
            text: "Here is your logo".into(),
        },
        ContentPart::InlineData {
            inline_data: InlineData {
                mime_type: "image/png".into(),
                data: data.into(),
            },
        },
    ])
}
