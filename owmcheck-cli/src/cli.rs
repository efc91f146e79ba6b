use anyhow::bail;
use clap::{Parser, Subcommand};

use owmcheck_core::{
    ApiClient, Config, ScenarioId,
    scenario::{self, Scenario},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "owmcheck",
    version,
    about = "Conformance checks against the OpenWeatherMap API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the conformance suite and exit non-zero if any scenario fails.
    Check {
        /// Override the API base URL.
        #[arg(long)]
        base_url: Option<String>,

        /// City whose weather is checked.
        #[arg(long)]
        city: Option<String>,

        /// Latitude for the coordinate lookup.
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude for the coordinate lookup.
        #[arg(long)]
        lon: Option<f64>,

        /// Run a single scenario, e.g. "current-by-city".
        #[arg(long)]
        only: Option<String>,
    },

    /// Store the API key in the platform config file.
    Configure,

    /// List the available scenarios.
    List,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        // Bare `owmcheck` runs the full suite with the configured defaults.
        let command = self.command.unwrap_or(Command::Check {
            base_url: None,
            city: None,
            lat: None,
            lon: None,
            only: None,
        });

        match command {
            Command::Check {
                base_url,
                city,
                lat,
                lon,
                only,
            } => check(base_url, city, lat, lon, only).await,
            Command::Configure => configure(),
            Command::List => {
                for scenario in scenario::all_scenarios() {
                    println!("{:<24} {}", scenario.name(), scenario.description());
                }
                Ok(())
            }
        }
    }
}

async fn check(
    base_url: Option<String>,
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    only: Option<String>,
) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    config.apply_env();

    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(city) = city {
        config.city = city;
    }
    if let Some(lat) = lat {
        config.lat = lat;
    }
    if let Some(lon) = lon {
        config.lon = lon;
    }

    if !config.has_api_key() {
        eprintln!(
            "warning: no API key configured; every request will be rejected.\n\
             Hint: run `owmcheck configure` or set the API_KEY environment variable."
        );
    }

    let scenarios: Vec<Box<dyn Scenario>> = match only {
        Some(name) => vec![scenario::scenario_for(ScenarioId::try_from(
            name.as_str(),
        )?)],
        None => scenario::all_scenarios(),
    };

    let client = ApiClient::new(&config);
    let report = scenario::run_suite(&client, &config, &scenarios).await;

    print!("{report}");

    if !report.all_passed() {
        bail!(
            "{} of {} checks failed",
            report.failed_count(),
            report.outcomes.len()
        );
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()?;
    config.api_key = key;
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}
