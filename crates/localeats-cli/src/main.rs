mod controller;
mod render;
mod session;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use localeats_core::{AppConfig, Coordinate, GroundedAnswerSource, LocalFoodAnswer};
use localeats_gemini::GeminiClient;
use localeats_locator::{FixedLocation, LocationProvider, PlatformLocator};
use tracing_subscriber::EnvFilter;

use crate::controller::{Controller, Phase};

#[derive(Debug, Parser)]
#[command(name = "localeats")]
#[command(about = "Find authentic local food near you with grounded AI recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search and print the results
    Search {
        /// What to look for; defaults to the filter label
        query: Option<String>,

        /// Filter chip to activate (e.g. "Street Food" or 2)
        #[arg(long, value_parser = parse_filter)]
        filter: Option<String>,

        /// Latitude to search from instead of geolocating
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude to search from instead of geolocating
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Print the recommendations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Acquire and print the current location
    Locate,
    /// Start an interactive session (default)
    Interactive,
}

fn parse_filter(input: &str) -> Result<String, String> {
    session::resolve_filter(input)
        .map(str::to_owned)
        .ok_or_else(|| {
            format!(
                "unknown filter '{input}'; choose one of: {}",
                localeats_core::FILTER_CHIPS.join(", ")
            )
        })
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_locator(
    config: &AppConfig,
    lat: Option<f64>,
    lng: Option<f64>,
) -> anyhow::Result<PlatformLocator> {
    if let (Some(lat), Some(lng)) = (lat, lng) {
        let coordinate = Coordinate::new(lat, lng)?;
        return Ok(PlatformLocator::Fixed(FixedLocation(coordinate)));
    }
    PlatformLocator::from_config(config).context("failed to set up geolocation")
}

fn build_client(config: &AppConfig) -> anyhow::Result<GeminiClient> {
    GeminiClient::new(
        &config.gemini_base_url,
        &config.gemini_model,
        &config.user_agent,
    )
    .context("failed to build Gemini client")
}

/// Locates, applies `filter` then `query`, and searches once. The typed
/// query wins over the filter label.
///
/// Returns `false` when the controller ends in the error phase; the banner
/// goes to `err` in JSON mode and into the rendered screen otherwise.
async fn run_search<L, S>(
    controller: &mut Controller<L, S>,
    query: Option<String>,
    filter: Option<String>,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool>
where
    L: LocationProvider,
    S: GroundedAnswerSource + Sync,
{
    controller.locate().await;
    if let Some(label) = filter {
        controller.select_filter(label);
    }
    if let Some(text) = query {
        controller.set_query(text);
    }
    if controller.state().location.is_some() {
        controller.submit().await;
    }

    let state = controller.state();
    if let Phase::Error(message) = controller.phase() {
        if json {
            writeln!(err, "{message}")?;
        } else {
            writeln!(out, "{}", render::render(state))?;
        }
        return Ok(false);
    }

    if json {
        let answer = LocalFoodAnswer {
            explanation: state.explanation_text.clone(),
            records: state.records.clone(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&answer)?)?;
    } else {
        writeln!(out, "{}", render::render(state))?;
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = localeats_core::load_app_config()?;
    init_tracing(&config)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Search {
            query,
            filter,
            lat,
            lng,
            json,
        } => {
            let locator = build_locator(&config, lat, lng)?;
            let mut controller = Controller::new(locator, build_client(&config)?);
            let succeeded = run_search(
                &mut controller,
                query,
                filter,
                json,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )
            .await?;
            if !succeeded {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Locate => {
            let locator = build_locator(&config, None, None)?;
            match locator.acquire_location().await {
                Ok(coordinate) => println!("{coordinate}"),
                Err(failure) => {
                    eprintln!("{failure}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Interactive => {
            let locator = build_locator(&config, None, None)?;
            let mut controller = Controller::new(locator, build_client(&config)?);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::run_session(&mut controller, stdin, &mut stdout).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests;
