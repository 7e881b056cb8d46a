use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Screens the assistant can show: the home listing and one per tool.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppView {
    #[default]
    Home,
    Names,
    Logo,
    Content,
    Sentiment,
    Design,
    Consultant,
}

impl AppView {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Names => "Name Generator",
            Self::Logo => "Logo Assistant",
            Self::Content => "Content Hub",
            Self::Sentiment => "Sentiment Analysis",
            Self::Design => "Design System",
            Self::Consultant => "AI Consultant",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Home => "Pick a tool to start building your brand.",
            Self::Names => "Generate unique, industry-specific brand names with AI.",
            Self::Logo => "Create stunning professional logos and visual prompts.",
            Self::Content => "Craft high-converting ad copy and product descriptions.",
            Self::Sentiment => "Analyze reviews and rewrite for better brand perception.",
            Self::Design => "Automated color palettes and typography guidelines.",
            Self::Consultant => "Strategy advice powered by expert branding models.",
        }
    }

    pub fn is_tool(self) -> bool {
        self != Self::Home
    }

    /// The six tools, in home-screen order.
    pub fn tools() -> impl Iterator<Item = AppView> {
        Self::iter().filter(|view| view.is_tool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn six_tools_listed_in_order() {
        let tools: Vec<AppView> = AppView::tools().collect();
        assert_eq!(
            tools,
            vec![
                AppView::Names,
                AppView::Logo,
                AppView::Content,
                AppView::Sentiment,
                AppView::Design,
                AppView::Consultant,
            ]
        );
    }

    #[test]
    fn view_ids_parse_from_lowercase() {
        assert_eq!(AppView::from_str("consultant").unwrap(), AppView::Consultant);
        assert_eq!(AppView::Design.to_string(), "design");
        assert!(!AppView::Home.is_tool());
    }
}
