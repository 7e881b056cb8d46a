//! Fixed prompt templates. Only user fields vary between calls.

use crate::contracts::{
    BRAND_NAME_BATCH_SIZE, ContentKind, PALETTE_SIZE, SENTIMENT_REWRITE_COUNT, Tone,
};

pub const CONSULTANT_PERSONA: &str = "You are an expert brand strategy consultant with 20 years \
of experience. Your goal is to help founders build resonant, consistent, and powerful brands. \
Keep your advice strategic, professional, yet encouraging.";

pub const LOGO_ASPECT_RATIO: &str = "1:1";

pub fn brand_names_prompt(industry: &str, keywords: &str, tone: Tone) -> String {
    format!(
        "Generate {BRAND_NAME_BATCH_SIZE} unique and creative brand names for a business in the \
         {industry} industry.\nKeywords: {keywords}.\nTone: {tone}.\nProvide the output as a JSON \
         array of objects with \"name\" and \"tagline\" properties."
    )
}

pub fn marketing_prompt(kind: ContentKind, brand_name: &str, brand_details: &str) -> String {
    match kind {
        ContentKind::Description => format!(
            "Write a compelling 200-word product description for {brand_name}. Context: \
             {brand_details}."
        ),
        ContentKind::Social => format!(
            "Generate 5 social media captions with hashtags for {brand_name}. Context: \
             {brand_details}."
        ),
        ContentKind::Ads => format!(
            "Write 3 high-converting ad copies (Headline and Body) for {brand_name}. Context: \
             {brand_details}."
        ),
    }
}

pub fn logo_prompt(description: &str) -> String {
    format!(
        "A professional, minimalist vector logo for: {description}. White background, clean \
         lines, high quality, centered."
    )
}

pub fn sentiment_prompt(reviews: &str) -> String {
    format!(
        "Analyze the following customer reviews and provide a JSON response.\nDetermine tone, \
         sentiment score (0 to 1), actionable suggestions, and {SENTIMENT_REWRITE_COUNT} \
         professional rewrites of negative sentiments.\nReviews: \"{reviews}\""
    )
}

pub fn design_system_prompt(personality: &str) -> String {
    format!(
        "Create a visual design system for a brand with the personality: \"{personality}\".\n\
         Provide {PALETTE_SIZE} HEX color codes that work well together, font suggestions (one \
         for headings, one for body), and a brief visual style description.\nReturn as JSON."
    )
}
