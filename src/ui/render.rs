use super::style::Ink;
use crate::app::AppView;
use crate::contracts::{
    BrandNameSuggestion, ChatRole, ChatTurn, DesignSystem, MarketingContent, SentimentResult,
};

pub fn render_home() -> String {
    let mut lines = vec![
        format!("◆ {}", Ink::Title.paint("BrandPulse")),
        Ink::Muted.paint(AppView::Home.description()),
        String::new(),
    ];
    for view in AppView::tools() {
        lines.push(format!(
            "  {:<10} {}",
            Ink::Marker.paint(view),
            Ink::Title.paint(view.title())
        ));
        lines.push(format!("             {}", Ink::Muted.paint(view.description())));
    }
    lines.join("\n")
}

pub fn render_names(suggestions: &[BrandNameSuggestion]) -> String {
    if suggestions.is_empty() {
        return Ink::Warn.paint("No names came back. Try different keywords.");
    }
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{} {}\n   {}",
                Ink::Marker.paint(format!("{:>2}.", i + 1)),
                Ink::Title.paint(&s.name),
                Ink::Muted.paint(&s.tagline)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_content(content: &MarketingContent) -> String {
    format!(
        "{} {}\n\n{}",
        Ink::Label.paint("Format:"),
        content.kind,
        content.text.trim()
    )
}

pub fn render_sentiment(result: &SentimentResult) -> String {
    let score = if result.score_in_range() {
        Ink::Good.paint(format!("{}%", result.score_percent()))
    } else {
        Ink::Warn.paint(format!("{} (outside 0..1)", result.score))
    };

    let mut lines = vec![
        format!("{} {}", Ink::Label.paint("Tone: "), Ink::Title.paint(&result.tone)),
        format!("{} {score}", Ink::Label.paint("Score:")),
        String::new(),
        Ink::Title.paint("Suggestions"),
    ];
    lines.extend(result.suggestions.iter().map(|s| format!("  • {s}")));
    lines.push(String::new());
    lines.push(Ink::Title.paint("Rewrites"));
    lines.extend(
        result
            .rewrites
            .iter()
            .enumerate()
            .map(|(i, r)| format!("  {} {r}", Ink::Marker.paint(format!("{}.", i + 1)))),
    );
    lines.join("\n")
}

pub fn render_design(design: &DesignSystem) -> String {
    let invalid = design.invalid_swatches();
    let mut lines = vec![Ink::Title.paint("Palette")];
    for swatch in &design.palette {
        if invalid.contains(&swatch.as_str()) {
            lines.push(format!("  {}", Ink::Warn.paint(format!("{swatch} (not a hex color)"))));
        } else {
            lines.push(format!("  {}", Ink::Good.paint(swatch)));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        Ink::Label.paint("Heading font:"),
        design.fonts.heading
    ));
    lines.push(format!("{} {}", Ink::Label.paint("Body font:   "), design.fonts.body));
    lines.push(String::new());
    lines.push(design.description.trim().to_string());
    lines.join("\n")
}

pub fn render_turn(turn: &ChatTurn) -> String {
    let speaker = match turn.role {
        ChatRole::User => Ink::Marker.paint("you"),
        ChatRole::Model => Ink::Done.paint("consultant"),
    };
    format!("{speaker}: {}", turn.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{ContentKind, FontPairing};

    #[test]
    fn home_lists_every_tool() {
        let home = render_home();
        for view in AppView::tools() {
            assert!(home.contains(view.title()), "missing {view}");
        }
    }

    #[test]
    fn names_are_numbered_in_order() {
        let rendered = render_names(&[
            BrandNameSuggestion {
                name: "Lumen".into(),
                tagline: "Light the way".into(),
            },
            BrandNameSuggestion {
                name: "Kestrel".into(),
                tagline: "Swift and sure".into(),
            },
        ]);
        let lumen = rendered.find("Lumen").unwrap();
        let kestrel = rendered.find("Kestrel").unwrap();
        assert!(lumen < kestrel);
        assert!(rendered.contains("Swift and sure"));
    }

    #[test]
    fn empty_names_get_a_hint() {
        assert!(render_names(&[]).contains("No names came back"));
    }

    #[test]
    fn content_shows_format_and_text() {
        let rendered = render_content(&MarketingContent {
            kind: ContentKind::Social,
            text: "  Ship it.  ".into(),
        });
        assert!(rendered.contains("social"));
        assert!(rendered.ends_with("Ship it."));
    }

    #[test]
    fn sentiment_flags_out_of_range_scores() {
        let mut result = SentimentResult {
            tone: "Mixed".into(),
            score: 0.42,
            suggestions: vec!["Reply faster".into()],
            rewrites: vec!["a".into(), "b".into()],
        };
        assert!(render_sentiment(&result).contains("42%"));

        result.score = 7.0;
        assert!(render_sentiment(&result).contains("outside 0..1"));
    }

    #[test]
    fn design_marks_non_hex_swatches() {
        let rendered = render_design(&DesignSystem {
            palette: vec!["#112233".into(), "teal".into()],
            fonts: FontPairing {
                heading: "Playfair Display".into(),
                body: "Inter".into(),
            },
            description: "Calm and premium.".into(),
        });
        assert!(rendered.contains("teal (not a hex color)"));
        assert!(!rendered.contains("#112233 (not a hex color)"));
        assert!(rendered.contains("Playfair Display"));
    }

    #[test]
    fn turns_are_labelled_by_speaker() {
        assert!(render_turn(&ChatTurn::user("hi")).ends_with(": hi"));
        assert!(render_turn(&ChatTurn::model("hello")).contains("consultant"));
    }
}
