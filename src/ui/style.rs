use std::fmt::Display;

use console::Style;

/// What a piece of terminal output means, independent of how it is colored.
///
/// Renderers pick an `Ink` by role; the palette lives only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Screen titles and brand names.
    Title,
    /// Taglines and help text.
    Muted,
    /// List numbers and the user's speaker label.
    Marker,
    /// Field names in front of a value.
    Label,
    /// Accepted values such as scores and hex swatches.
    Good,
    /// Values that passed through but look off.
    Warn,
    /// Completed actions and the consultant's speaker label.
    Done,
    Fail,
}

impl Ink {
    fn style(self) -> Style {
        let base = Style::new();
        match self {
            Self::Title => base.white().bold(),
            Self::Muted => base.dim(),
            Self::Marker => base.cyan().bold(),
            Self::Label => base.cyan(),
            Self::Good => base.green(),
            Self::Warn => base.yellow(),
            Self::Done => base.green().bold(),
            Self::Fail => base.red().bold(),
        }
    }

    pub fn paint<D: Display>(self, text: D) -> String {
        self.style().apply_to(text).to_string()
    }
}
