#[path = "support/scripted_backend.rs"]
mod scripted_backend;

use std::sync::Arc;

use brandpulse::contracts::{ContentKind, PALETTE_SIZE, Tone};
use brandpulse::llm::{MessageRole, SchemaType};
use brandpulse::orchestration::{BrandService, ModelSelection};
use scripted_backend::{ScriptedBackend, image_response};
use serde_json::json;

fn models() -> ModelSelection {
    ModelSelection {
        text: "text-model".into(),
        image: "image-model".into(),
    }
}

fn service(backend: &Arc<ScriptedBackend>) -> BrandService {
    BrandService::new(backend.clone(), models())
}

fn names_payload(count: usize) -> String {
    let names: Vec<_> = (0..count)
        .map(|i| json!({"name": format!("Brand{i}"), "tagline": format!("Tagline {i}")}))
        .collect();
    serde_json::Value::Array(names).to_string()
}

// ── Brand names ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn brand_names_returns_every_suggestion_in_order() {
    let backend = ScriptedBackend::replying(&[names_payload(15).as_str()]);

    let names = service(&backend)
        .generate_brand_names("Coffee", "bold, morning", Tone::Playful)
        .await
        .unwrap();

    assert_eq!(names.len(), 15);
    assert_eq!(names[0].name, "Brand0");
    assert_eq!(names[14].tagline, "Tagline 14");
    assert!(names.iter().all(|s| !s.name.is_empty() && !s.tagline.is_empty()));
}

#[tokio::test]
async fn brand_names_request_declares_schema_and_user_fields() {
    let backend = ScriptedBackend::replying(&[names_payload(15).as_str()]);

    service(&backend)
        .generate_brand_names("Fintech", "trust, speed", Tone::Corporate)
        .await
        .unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model, "text-model");
    assert!(request.system_instruction.is_none());

    let schema = request.response_schema.as_ref().unwrap();
    assert_eq!(schema.kind, SchemaType::Array);
    let item = schema.items.as_ref().unwrap();
    assert_eq!(item.required, vec!["name".to_string(), "tagline".to_string()]);

    let prompt = &request.contents[0].text;
    assert!(prompt.contains("Fintech"));
    assert!(prompt.contains("trust, speed"));
    assert!(prompt.contains("Corporate"));
}

#[tokio::test]
async fn brand_names_accepts_fenced_json_and_other_batch_sizes() {
    let fenced = format!("```json\n{}\n```", names_payload(3));
    let backend = ScriptedBackend::replying(&[fenced.as_str()]);

    let names = service(&backend)
        .generate_brand_names("Tea", "calm", Tone::Minimalist)
        .await
        .unwrap();

    assert_eq!(names.len(), 3);
}

#[tokio::test]
async fn brand_names_empty_body_is_an_empty_list() {
    let backend = ScriptedBackend::replying(&[""]);

    let names = service(&backend)
        .generate_brand_names("Tea", "calm", Tone::Modern)
        .await
        .unwrap();

    assert!(names.is_empty());
}

#[tokio::test]
async fn brand_names_rejects_non_json_and_missing_fields() {
    let backend = ScriptedBackend::replying(&[
        "Here are some names: Lumen, Kestrel",
        r#"[{"name": "Lumen"}]"#,
        r#"[{"name": "  ", "tagline": "blank name"}]"#,
    ]);
    let service = service(&backend);

    for _ in 0..3 {
        let err = service
            .generate_brand_names("Tea", "calm", Tone::Modern)
            .await
            .unwrap_err();
        assert!(err.is_malformed(), "expected malformed, got {err}");
    }
}

#[tokio::test]
async fn blank_inputs_are_rejected_without_a_request() {
    let backend = ScriptedBackend::replying(&[]);
    let service = service(&backend);

    let errors = [
        service
            .generate_brand_names(" ", "calm", Tone::Modern)
            .await
            .unwrap_err(),
        service
            .generate_brand_names("Tea", "", Tone::Modern)
            .await
            .unwrap_err(),
        service
            .generate_marketing_content(ContentKind::Ads, "", "details")
            .await
            .unwrap_err(),
        service.generate_logo("\n").await.unwrap_err(),
        service.analyze_sentiment("").await.unwrap_err(),
        service.generate_design_system("   ").await.unwrap_err(),
    ];

    assert!(errors.iter().all(brandpulse::BrandError::is_precondition));
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn backend_failures_surface_as_upstream() {
    let backend = ScriptedBackend::new(vec![Err(anyhow::anyhow!(
        "Gemini API error (503 Service Unavailable)"
    ))]);

    let err = service(&backend)
        .generate_brand_names("Tea", "calm", Tone::Modern)
        .await
        .unwrap_err();

    assert!(err.is_upstream());
    assert!(err.to_string().contains("503"));
    assert_eq!(backend.request_count(), 1);
}

// ── Marketing content ───────────────────────────────────────────────────────

#[tokio::test]
async fn marketing_content_returns_text_verbatim_per_kind() {
    let backend = ScriptedBackend::replying(&["Copy A", "Copy B", ""]);
    let service = service(&backend);

    let description = service
        .generate_marketing_content(ContentKind::Description, "Lumen", "smart lamps")
        .await
        .unwrap();
    let social = service
        .generate_marketing_content(ContentKind::Social, "Lumen", "smart lamps")
        .await
        .unwrap();
    let empty = service
        .generate_marketing_content(ContentKind::Ads, "Lumen", "smart lamps")
        .await
        .unwrap();

    assert_eq!(description, "Copy A");
    assert_eq!(social, "Copy B");
    assert_eq!(empty, "");

    let prompts: Vec<String> = backend
        .requests()
        .iter()
        .map(|r| r.contents[0].text.clone())
        .collect();
    assert!(prompts[0].contains("200-word product description"));
    assert!(prompts[1].contains("social media captions"));
    assert!(prompts[2].contains("ad copies"));
    assert!(backend.requests().iter().all(|r| r.response_schema.is_none()));
}

// ── Logo ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn logo_returns_png_data_uri_from_first_image_part() {
    let backend = ScriptedBackend::new(vec![Ok(image_response("iVBORw0KGgo="))]);

    let uri = service(&backend)
        .generate_logo("a fox made of circles")
        .await
        .unwrap();

    assert_eq!(uri.as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));

    let requests = backend.requests();
    let request = &requests[0];
    assert_eq!(request.model, "image-model");
    assert_eq!(request.aspect_ratio.as_deref(), Some("1:1"));
    assert!(request.contents[0].text.contains("a fox made of circles"));
}

#[tokio::test]
async fn logo_without_image_part_is_none() {
    let backend = ScriptedBackend::replying(&["I cannot draw that."]);

    let uri = service(&backend).generate_logo("a fox").await.unwrap();

    assert!(uri.is_none());
}

// ── Sentiment ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn sentiment_decodes_all_fields() {
    let payload = json!({
        "tone": "Mixed",
        "score": 0.62,
        "suggestions": ["Reply faster", "Fix packaging"],
        "rewrites": ["We are on it.", "Thanks for the patience."]
    })
    .to_string();
    let backend = ScriptedBackend::replying(&[payload.as_str()]);

    let result = service(&backend)
        .analyze_sentiment("Great taste, slow shipping.")
        .await
        .unwrap();

    assert_eq!(result.tone, "Mixed");
    assert!((result.score - 0.62).abs() < f64::EPSILON);
    assert_eq!(result.suggestions.len(), 2);
    assert_eq!(result.rewrites.len(), 2);

    let requests = backend.requests();
    let request = &requests[0];
    assert_eq!(request.response_schema.as_ref().unwrap().kind, SchemaType::Object);
    assert!(request.contents[0].text.contains("Great taste, slow shipping."));
}

#[tokio::test]
async fn sentiment_score_is_passed_through_unclamped() {
    let payload = json!({"tone": "Euphoric", "score": 1.7, "suggestions": [], "rewrites": []})
        .to_string();
    let backend = ScriptedBackend::replying(&[payload.as_str()]);

    let result = service(&backend).analyze_sentiment("wow").await.unwrap();

    assert!((result.score - 1.7).abs() < f64::EPSILON);
    assert!(!result.score_in_range());
}

#[tokio::test]
async fn sentiment_missing_tone_is_malformed() {
    let payload = json!({"score": 0.5, "suggestions": [], "rewrites": []}).to_string();
    let backend = ScriptedBackend::replying(&[payload.as_str()]);

    let err = service(&backend).analyze_sentiment("meh").await.unwrap_err();

    assert!(err.is_malformed());
}

// ── Design system ───────────────────────────────────────────────────────────

#[tokio::test]
async fn design_system_preserves_palette_order() {
    let payload = json!({
        "palette": ["#0F172A", "#F8FAFC", "#38BDF8", "#F59E0B", "#10B981"],
        "fonts": {"heading": "Playfair Display", "body": "Inter"},
        "description": "Calm, premium, and quietly confident."
    })
    .to_string();
    let backend = ScriptedBackend::replying(&[payload.as_str()]);

    let design = service(&backend)
        .generate_design_system("calm, premium")
        .await
        .unwrap();

    assert_eq!(design.palette.len(), PALETTE_SIZE);
    assert_eq!(design.palette[0], "#0F172A");
    assert_eq!(design.palette[4], "#10B981");
    assert_eq!(design.fonts.heading, "Playfair Display");
    assert!(design.invalid_swatches().is_empty());

    let schema = backend.requests()[0].response_schema.clone().unwrap();
    assert!(schema.property("fonts").is_some());
}

#[tokio::test]
async fn design_system_missing_fonts_is_malformed() {
    let payload = json!({"palette": ["#000000"], "description": "x"}).to_string();
    let backend = ScriptedBackend::replying(&[payload.as_str()]);

    let err = service(&backend)
        .generate_design_system("bold")
        .await
        .unwrap_err();

    assert!(err.is_malformed());
}

#[tokio::test]
async fn one_shot_operations_never_send_a_persona_or_history() {
    let backend = ScriptedBackend::replying(&["a", "b"]);
    let service = service(&backend);
    service
        .generate_marketing_content(ContentKind::Social, "Lumen", "lamps")
        .await
        .unwrap();
    service
        .generate_marketing_content(ContentKind::Social, "Lumen", "lamps")
        .await
        .unwrap();

    for request in backend.requests() {
        assert!(request.system_instruction.is_none());
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, MessageRole::User);
    }
}
