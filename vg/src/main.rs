//! viaggio - personal Modena travel planner
//!
//! CLI entry point wiring configuration into the library panels.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use viaggio::cli::{Cli, Command};
use viaggio::config::Config;
use viaggio::genai::{self, GenAiClient};
use viaggio::panel::{QUICK_QUERIES, RequestState};
use viaggio::session::Session;
use viaggio::trip::ItineraryPlan;

fn setup_logging(verbose: bool) {
    // Diagnostics go to stderr; command output owns stdout
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Gallery => cmd_gallery(),
        Command::Plan { days, interests } => {
            let client = make_client(&config)?;
            cmd_plan(client.as_ref(), days, &interests).await
        }
        Command::Ask { query } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                print_quick_queries();
                return Ok(());
            }
            let client = make_client(&config)?;
            cmd_ask(client.as_ref(), &query).await
        }
        Command::Image { prompt, output } => {
            let client = make_client(&config)?;
            cmd_image(&config, client.as_ref(), &prompt.join(" "), output).await
        }
    }
}

fn make_client(config: &Config) -> Result<std::sync::Arc<dyn GenAiClient>> {
    // Fail fast on missing credentials before any call goes out
    config.validate()?;
    info!(model = %config.genai.model_pro, "creating GenAI client");
    genai::create_client(&config.genai).context("Failed to create GenAI client")
}

/// Generate and print an itinerary
async fn cmd_plan(client: &dyn GenAiClient, days: u8, interests: &[String]) -> Result<()> {
    let mut session = Session::new();

    let draft = session.planner.draft_mut();
    draft.set_duration(days);
    if !interests.is_empty() {
        // Replace the default set with exactly the requested tags
        draft.clear_interests();
        let tags: BTreeSet<&String> = interests.iter().collect();
        for tag in tags {
            draft.toggle_interest(tag);
        }
    }

    let request = session.planner.draft().build_request();
    println!(
        "Planning {} days in Modena, interests: {}",
        request.duration_days,
        request
            .interests
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    session.planner.submit(client).await;

    let mut failed = false;
    match session.planner.state() {
        RequestState::Success(plan) => print_plan(plan),
        RequestState::Failure(message) => {
            eprintln!("{}", message.red());
            failed = true;
        }
        _ => {}
    }

    session.close();
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn print_plan(plan: &ItineraryPlan) {
    for day in &plan.days {
        println!("{}", format!("Day {}: {}", day.day, day.title).bold().red());
        for activity in &day.activities {
            println!(
                "  {} {}",
                format!("[{}]", activity.time).bold(),
                activity.location
            );
            println!("      {}", activity.description);
        }
        println!();
    }
}

/// Ask the concierge and print the answer with its sources
async fn cmd_ask(client: &dyn GenAiClient, query: &str) -> Result<()> {
    let mut session = Session::new();

    session.guide.submit(client, query).await;

    let mut failed = false;
    match session.guide.state() {
        RequestState::Success(result) => {
            println!("{}", result.display_text());

            if !result.sources.is_empty() {
                println!();
                println!("{}", "Verified web sources:".bold());
                for source in &result.sources {
                    println!("  {} {}", source.title.green(), source.uri.dimmed());
                }
            }
        }
        RequestState::Failure(message) => {
            eprintln!("{}", message.red());
            failed = true;
        }
        _ => {}
    }

    session.close();
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn print_quick_queries() {
    println!("{}", "Real-time quick queries:".bold());
    for query in QUICK_QUERIES {
        println!("  vg ask {}", query);
    }
}

/// Generate a travel photo and write it to disk
async fn cmd_image(
    config: &Config,
    client: &dyn GenAiClient,
    prompt: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(eyre::eyre!("Image prompt must not be empty"));
    }

    match client.generate_image(prompt).await {
        Ok(Some(image)) => {
            let bytes = STANDARD
                .decode(&image.data)
                .context("Failed to decode image payload")?;

            let path = output.unwrap_or_else(|| config.output.image_dir.join("viaggio-image.png"));
            fs::write(&path, &bytes)
                .context(format!("Failed to write image to {}", path.display()))?;

            println!(
                "Wrote {} image to {}",
                image.mime_type,
                path.display().to_string().green()
            );
            Ok(())
        }
        Ok(None) => {
            // A valid outcome, distinct from the call failing
            println!("The model produced no image for this prompt.");
            Ok(())
        }
        Err(e) => Err(e).context("Image generation failed"),
    }
}

/// Print the seeded experience catalog
fn cmd_gallery() -> Result<()> {
    let session = Session::new();

    println!("{}", "Experience gallery".bold().red());
    println!();

    for record in session.gallery().records() {
        println!(
            "  {} {} {}",
            record.id.bold(),
            format!("[{}]", record.category).yellow(),
            record.title
        );
        println!("      {}", record.description);
        match &record.notes {
            Some(notes) if notes.is_empty() => println!("      {}", "notes cleared".dimmed()),
            Some(notes) => println!("      notes: {}", notes),
            None => println!("      {}", "no notes yet".dimmed()),
        }
        println!();
    }

    Ok(())
}
