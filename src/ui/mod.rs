//! Terminal rendering for tool results and the consultant transcript.

pub mod render;
pub mod style;
