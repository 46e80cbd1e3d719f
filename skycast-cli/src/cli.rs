use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use skycast_core::{
    IpLocationSource, Settings, Units, WeatherClient, WeatherPresenter, search_by_city,
    search_by_location,
};
use tracing::debug;

use crate::term::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather by city or location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    City {
        /// City name; prompts interactively when omitted.
        name: Option<String>,
    },

    /// Show current weather for where you are (IP geolocation).
    Here,

    /// Store the OpenWeather API key and preferred units.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::City { name } => {
                let settings = load_settings()?;

                let raw_input = match name {
                    Some(name) => name,
                    None => Text::new("City name:").prompt()?,
                };

                let client = WeatherClient::new(&settings);
                let mut presenter = WeatherPresenter::new(TerminalView::new(), settings.units);

                search_by_city(&client, &mut presenter, &raw_input).await;
            }

            Command::Here => {
                let settings = load_settings()?;

                let client = WeatherClient::new(&settings);
                let mut presenter = WeatherPresenter::new(TerminalView::new(), settings.units);
                let source = IpLocationSource::new();

                search_by_location(&client, &mut presenter, &source).await;
            }

            Command::Configure => configure()?,
        }

        Ok(())
    }
}

fn load_settings() -> anyhow::Result<Settings> {
    let settings = Settings::load()?;
    settings.require_api_key()?;

    debug!(units = %settings.units, "settings loaded");
    Ok(settings)
}

fn configure() -> anyhow::Result<()> {
    let mut settings = Settings::load()?;

    let api_key = Text::new("OpenWeather API key:").prompt()?;
    let units = Select::new("Units:", vec!["metric", "imperial"]).prompt()?;

    settings.api_key = api_key.trim().to_string();
    settings.units = Units::try_from(units)?;
    settings.save()?;

    println!(
        "Saved settings to {}",
        Settings::settings_file_path()?.display()
    );

    Ok(())
}
