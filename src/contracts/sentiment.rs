use serde::{Deserialize, Serialize};

/// Number of professional rewrites requested per analysis.
pub const SENTIMENT_REWRITE_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub tone: String,
    /// Expected in `[0, 1]`; carried exactly as the model returned it.
    pub score: f64,
    pub suggestions: Vec<String>,
    pub rewrites: Vec<String>,
}

impl SentimentResult {
    pub fn score_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.score)
    }

    /// Score as a whole percentage, for display.
    pub fn score_percent(&self) -> i64 {
        #[allow(clippy::cast_possible_truncation)]
        let pct = (self.score * 100.0).round() as i64;
        pct
    }
}
