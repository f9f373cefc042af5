use anyhow::anyhow;
use clap::{Parser, Subcommand};
use inquire::Text;
use skycast_core::{Config, SkycastError, aggregate, normalize, provider_from_config};

use crate::app::AppState;
use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure API credentials interactively.
    Configure,

    /// Show current conditions for a location.
    Show {
        /// Location name, e.g. "London".
        location: String,
    },

    /// Show the multi-day forecast and daily summaries for a location.
    Forecast {
        /// Location name, e.g. "London".
        location: String,
    },

    /// Show weather headlines (cached, with offline fallback).
    News {
        /// Bypass the cache and refetch.
        #[arg(long)]
        refresh: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config),
            Command::Show { location } => show(&config, &location).await,
            Command::Forecast { location } => forecast(&config, &location).await,
            Command::News { refresh } => {
                news(&config, refresh).await;
                Ok(())
            }
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let weather_key = Text::new("OpenWeather API key:")
        .with_help_message("Get a free key at https://openweathermap.org/api")
        .prompt()?;
    config.set_open_weather_key(weather_key.trim().to_string());

    let news_key = Text::new("News API key (optional):")
        .with_help_message("Leave empty to use the bundled offline headlines")
        .prompt()?;
    let news_key = news_key.trim();
    config.set_news_key(if news_key.is_empty() {
        None
    } else {
        Some(news_key.to_string())
    });

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(config: &Config, location: &str) -> anyhow::Result<()> {
    let provider = provider_from_config(config).map_err(friendly)?;

    let current = provider.current(location).await.map_err(friendly)?;
    print!("{}", render::current_conditions(&current));
    Ok(())
}

async fn forecast(config: &Config, location: &str) -> anyhow::Result<()> {
    let provider = provider_from_config(config).map_err(friendly)?;

    let batch = provider.forecast(location).await.map_err(friendly)?;
    let records = normalize(&batch.samples, batch.utc_offset_seconds);
    let summaries = aggregate(&records);

    println!("Forecast for {}", batch.location_name);
    print!("{}", render::forecast_table(&records));
    println!();
    println!("Daily summary");
    print!("{}", render::daily_summaries(&summaries));
    Ok(())
}

/// News never fails: fetch errors collapse into the fallback dataset inside
/// the cache.
async fn news(config: &Config, refresh: bool) {
    let mut state = AppState::new(config);
    let items = state.headlines(refresh).await;
    print!("{}", render::headlines(&items));
}

fn friendly(err: SkycastError) -> anyhow::Error {
    anyhow!(err.user_message())
}
