use crate::contracts::{ContentKind, Tone};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// `BrandPulse` - generative branding assistant.
#[derive(Parser, Debug)]
#[command(name = "brandpulse")]
#[command(version)]
#[command(about = "Brand names, logos, copy, sentiment and design systems from one CLI.", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available tools
    Home,

    /// Show configuration, models and retry policy
    Status,

    /// Suggest brand names with taglines
    Names {
        /// Industry the brand operates in
        #[arg(long)]
        industry: String,

        /// Keywords or themes to draw from
        #[arg(long)]
        keywords: String,

        /// Brand voice (modern, luxury, playful, minimalist, corporate)
        #[arg(long, default_value_t = Tone::Modern, value_parser = parse_tone)]
        tone: Tone,
    },

    /// Generate a square logo
    Logo {
        /// What the logo should depict
        description: String,

        /// Write the decoded PNG to this file instead of printing the data URI
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write marketing copy
    Content {
        /// Format: description, social or ads
        #[arg(value_parser = parse_content_kind)]
        kind: ContentKind,

        /// Brand name
        #[arg(long)]
        brand: String,

        /// Product or brand details
        #[arg(long)]
        details: String,
    },

    /// Analyze customer reviews and suggest rewrites
    Sentiment {
        /// Review text (omit to read from --file)
        reviews: Option<String>,

        /// Read reviews from a file
        #[arg(short, long, conflicts_with = "reviews")]
        file: Option<PathBuf>,
    },

    /// Generate a palette, font pairing and rationale
    Design {
        /// Brand personality, e.g. "calm, premium, eco-minded"
        personality: String,
    },

    /// Talk to the branding consultant
    Chat {
        /// Single message mode (don't enter interactive mode)
        #[arg(short, long)]
        message: Option<String>,
    },
}

fn parse_tone(raw: &str) -> Result<Tone, String> {
    Tone::from_str(raw).map_err(|_| {
        format!("unknown tone '{raw}' (expected modern, luxury, playful, minimalist or corporate)")
    })
}

fn parse_content_kind(raw: &str) -> Result<ContentKind, String> {
    ContentKind::from_str(raw)
        .map_err(|_| format!("unknown format '{raw}' (expected description, social or ads)"))
}
