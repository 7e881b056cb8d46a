//! Strict decoding of structured replies into contract types.

use crate::contracts::BrandNameSuggestion;
use crate::error::BrandError;
use serde::de::DeserializeOwned;

/// Remove a surrounding Markdown code fence (```` ```json ... ``` ````), if any.
pub(crate) fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match body.split_once('\n') {
        Some((info, inner)) if !info.trim_start().starts_with(['{', '[']) => inner.trim(),
        _ => body.trim(),
    }
}

/// Decode `raw` as `T`. An empty body is decoded as `empty_body` instead.
pub(crate) fn parse_structured<T: DeserializeOwned>(
    raw: &str,
    empty_body: &str,
    what: &str,
) -> Result<T, BrandError> {
    let body = strip_code_fence(raw);
    let body = if body.is_empty() { empty_body } else { body };
    serde_json::from_str(body)
        .map_err(|e| BrandError::malformed(format!("{what} did not match the declared schema: {e}")))
}

/// Every suggestion must carry a non-blank name and tagline.
pub(crate) fn validate_suggestions(suggestions: &[BrandNameSuggestion]) -> Result<(), BrandError> {
    for (index, suggestion) in suggestions.iter().enumerate() {
        if suggestion.name.trim().is_empty() {
            return Err(BrandError::malformed(format!(
                "brand name suggestion {index} has an empty name"
            )));
        }
        if suggestion.tagline.trim().is_empty() {
            return Err(BrandError::malformed(format!(
                "brand name suggestion {index} has an empty tagline"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::SentimentResult;

    #[test]
    fn fence_with_info_string_is_removed() {
        assert_eq!(strip_code_fence("```json\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn fence_without_info_string_is_removed() {
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```{\"a\": 1}```"), "{\"a\": 1}");
    }

    #[test]
    fn unfenced_body_is_only_trimmed() {
        assert_eq!(strip_code_fence("  {\"a\": 1}\n"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```unterminated"), "```unterminated");
    }

    #[test]
    fn empty_body_uses_fallback() {
        let parsed: Vec<BrandNameSuggestion> = parse_structured("   ", "[]", "names").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = parse_structured::<SentimentResult>(
            r#"{"score": 0.4, "suggestions": [], "rewrites": []}"#,
            "{}",
            "sentiment analysis",
        )
        .unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("tone"));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let err = parse_structured::<Vec<BrandNameSuggestion>>(
            r#"{"name": "x", "tagline": "y"}"#,
            "[]",
            "names",
        )
        .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn blank_tagline_fails_validation() {
        let suggestions = vec![
            BrandNameSuggestion {
                name: "Nimbus".into(),
                tagline: "Head in the cloud".into(),
            },
            BrandNameSuggestion {
                name: "Strata".into(),
                tagline: "  ".into(),
            },
        ];
        let err = validate_suggestions(&suggestions).unwrap_err();
        assert!(err.to_string().contains("suggestion 1 has an empty tagline"));
    }
}
