use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use weather_core::{Config, SearchController, SearchState, View};

use crate::render::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for any city")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for city names until Esc or Ctrl-C (the default).
    Interactive,

    /// Show current weather for one city.
    Show {
        /// City name, e.g. "Paris".
        city: String,

        /// Print location, conditions and card as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Edit service endpoints and request timeout.
    Configure {
        /// Print the effective configuration instead of editing it.
        #[arg(long)]
        show: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };

        match self.command.unwrap_or(Command::Interactive) {
            Command::Interactive => {
                let controller = controller_for(&config_path)?;
                interactive(&controller).await
            }
            Command::Show { city, json } => {
                let controller = controller_for(&config_path)?;
                show(&controller, &city, json).await
            }
            Command::Configure { show } => configure(&config_path, show),
        }
    }
}

fn controller_for(config_path: &Path) -> Result<SearchController> {
    let config = Config::load_from(config_path)?;
    SearchController::from_config(&config)
}

async fn interactive(controller: &SearchController) -> Result<ExitCode> {
    println!("Weather App  (Esc to quit)");

    loop {
        let pending = controller.state().query;
        let input = Text::new("City:")
            .with_placeholder("Enter city name...")
            .with_initial_value(&pending)
            .prompt();

        let input = match input {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city name"),
        };

        controller.set_query(input);

        let mut shown = String::new();
        controller
            .submit_observed(|state| {
                let text = render(&state.view());
                if !text.is_empty() && text != shown {
                    println!("{text}");
                    shown = text;
                }
            })
            .await;
    }

    Ok(ExitCode::SUCCESS)
}

async fn show(controller: &SearchController, city: &str, json: bool) -> Result<ExitCode> {
    let state = controller.search(city).await;

    match state.view() {
        View::Error(_) => {
            eprintln!("{}", render(&state.view()));
            Ok(ExitCode::FAILURE)
        }
        View::Result(card) if json => {
            println!("{}", to_json(&state, &card)?);
            Ok(ExitCode::SUCCESS)
        }
        view => {
            println!("{}", render(&view));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn to_json(state: &SearchState, card: &weather_core::ResultCard) -> Result<String> {
    let value = serde_json::json!({
        "location": state.location,
        "weather": state.weather,
        "card": card,
    });
    serde_json::to_string_pretty(&value).context("Failed to serialize result as JSON")
}

fn configure(config_path: &Path, show: bool) -> Result<ExitCode> {
    let mut cfg = Config::load_from(config_path)?;

    if show {
        println!("# {}", config_path.display());
        print!("{}", cfg.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    cfg.endpoints.geocoding = Text::new("Geocoding endpoint:")
        .with_default(&cfg.endpoints.geocoding)
        .prompt()
        .context("Failed to read geocoding endpoint")?;

    cfg.endpoints.forecast = Text::new("Forecast endpoint:")
        .with_default(&cfg.endpoints.forecast)
        .prompt()
        .context("Failed to read forecast endpoint")?;

    let current_timeout = cfg.timeout_secs.map(|t| t.to_string()).unwrap_or_default();
    let timeout = Text::new("Request timeout in seconds:")
        .with_help_message("Leave empty to wait indefinitely")
        .with_initial_value(&current_timeout)
        .prompt()
        .context("Failed to read request timeout")?;
    cfg.timeout_secs = parse_timeout(&timeout)?;

    cfg.save_to(config_path)?;
    println!("Saved configuration to {}", config_path.display());

    Ok(ExitCode::SUCCESS)
}

fn parse_timeout(input: &str) -> Result<Option<u64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| anyhow!("Timeout must be a whole number of seconds, got '{trimmed}'"))
}
