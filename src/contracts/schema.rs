//! Structured-output declarations sent with each JSON-returning request.

use crate::llm::ResponseSchema;

/// `[{ name, tagline }]`
pub fn brand_names_schema() -> ResponseSchema {
    ResponseSchema::array(ResponseSchema::object([
        ("name", ResponseSchema::string()),
        ("tagline", ResponseSchema::string()),
    ]))
}

/// `{ tone, score, suggestions[], rewrites[] }`
pub fn sentiment_schema() -> ResponseSchema {
    ResponseSchema::object([
        ("tone", ResponseSchema::string()),
        ("score", ResponseSchema::number()),
        ("suggestions", ResponseSchema::array(ResponseSchema::string())),
        ("rewrites", ResponseSchema::array(ResponseSchema::string())),
    ])
}

/// `{ palette[], fonts: { heading, body }, description }`
pub fn design_system_schema() -> ResponseSchema {
    ResponseSchema::object([
        ("palette", ResponseSchema::array(ResponseSchema::string())),
        (
            "fonts",
            ResponseSchema::object([
                ("heading", ResponseSchema::string()),
                ("body", ResponseSchema::string()),
            ]),
        ),
        ("description", ResponseSchema::string()),
    ])
}
