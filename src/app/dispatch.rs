use super::controller::BrandApp;
use super::status::render_status;
use super::view::AppView;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::orchestration::BrandService;
use crate::ui::render;
use crate::ui::style::Ink;
use anyhow::{Context, Result, bail};
use base64::Engine;
use dialoguer::Input;
use std::path::Path;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Decode a `data:image/png;base64,...` URI into raw PNG bytes.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let Some(payload) = uri.strip_prefix(DATA_URI_PREFIX) else {
        bail!("not a PNG data URI");
    };
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .context("logo payload is not valid base64")
}

fn write_logo(uri: &str, out: &Path) -> Result<()> {
    let bytes = decode_data_uri(uri)?;
    std::fs::write(out, &bytes)
        .with_context(|| format!("failed to write logo to {}", out.display()))?;
    tracing::info!(path = %out.display(), bytes = bytes.len(), "Logo saved");
    Ok(())
}

fn read_reviews(reviews: Option<String>, file: Option<&Path>) -> Result<String> {
    match (reviews, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read reviews from {}", path.display())),
        (None, None) => bail!("provide review text or --file"),
    }
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Home => {
            println!("{}", render::render_home());
            Ok(())
        }
        Commands::Status => {
            println!("{}", render_status(&config));
            Ok(())
        }
        command => {
            let mut app = BrandApp::new(BrandService::from_config(&config));
            run_tool(&mut app, command).await
        }
    }
}

async fn run_tool(app: &mut BrandApp, command: Commands) -> Result<()> {
    match command {
        Commands::Home | Commands::Status => Ok(()),
        Commands::Names {
            industry,
            keywords,
            tone,
        } => {
            app.navigate(AppView::Names);
            let names = app.submit_names(&industry, &keywords, tone).await?;
            println!("{}", render::render_names(names));
            Ok(())
        }
        Commands::Logo { description, out } => {
            app.navigate(AppView::Logo);
            match (app.submit_logo(&description).await?, out) {
                (None, _) => {
                    println!(
                        "{}",
                        Ink::Warn.paint("The model answered without an image. Try rephrasing.")
                    );
                }
                (Some(uri), Some(out)) => {
                    write_logo(uri, &out)?;
                    println!("{} {}", Ink::Done.paint("✓ Logo saved to"), out.display());
                }
                (Some(uri), None) => println!("{uri}"),
            }
            Ok(())
        }
        Commands::Content {
            kind,
            brand,
            details,
        } => {
            app.navigate(AppView::Content);
            let content = app.submit_content(kind, &brand, &details).await?;
            println!("{}", render::render_content(content));
            Ok(())
        }
        Commands::Sentiment { reviews, file } => {
            let reviews = read_reviews(reviews, file.as_deref())?;
            app.navigate(AppView::Sentiment);
            let result = app.submit_sentiment(&reviews).await?;
            println!("{}", render::render_sentiment(result));
            Ok(())
        }
        Commands::Design { personality } => {
            app.navigate(AppView::Design);
            let design = app.submit_design(&personality).await?;
            println!("{}", render::render_design(design));
            Ok(())
        }
        Commands::Chat { message } => run_chat(app, message).await,
    }
}

fn print_transcript(app: &BrandApp) {
    if let Some(session) = app.consultant() {
        for turn in session.transcript() {
            println!("{}", render::render_turn(turn));
        }
    }
}

async fn run_chat(app: &mut BrandApp, message: Option<String>) -> Result<()> {
    app.navigate(AppView::Consultant);

    if let Some(message) = message {
        let reply = app.send_chat(&message).await?;
        println!("{reply}");
        return Ok(());
    }

    print_transcript(app);
    println!(
        "{}",
        Ink::Muted.paint("Commands: /reset starts over, /transcript reprints, /exit leaves.")
    );

    loop {
        let line: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;

        match line.trim() {
            "" => {}
            "/exit" | "/quit" => break,
            "/reset" => {
                app.navigate(AppView::Home);
                app.navigate(AppView::Consultant);
                print_transcript(app);
            }
            "/transcript" => print_transcript(app),
            text => match app.send_chat(text).await {
                Ok(reply) => println!("{}: {reply}", Ink::Done.paint("consultant")),
                Err(e) => eprintln!("{}", Ink::Fail.paint(e)),
            },
        }
    }

    app.navigate(AppView::Home);
    Ok(())
}
