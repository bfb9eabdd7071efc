use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use common::Pollutant;

pub mod commands;

use commands::{classify, interactive, list_fields, parse_reading, predict};

use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "aqi-predictor")]
#[command(about = "Submit pollutant readings to an AQI prediction service")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./aqi-predictor.toml when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Prediction endpoint, overriding configuration
    ///
    /// Example: http://localhost:8000/predict
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit one set of readings and print the predicted AQI
    ///
    /// Every pollutant must be given exactly as the form would receive it:
    ///   aqi-predictor predict --set PM2.5=110 --set PM10=150 --set NO=25 ...
    Predict {
        /// A reading as KEY=VALUE, repeatable. Keys: PM2.5, PM10, NO, NO2,
        /// NOx, NH3, CO, SO2, O3, Benzene, Toluene, Xylene
        #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_reading)]
        readings: Vec<(Pollutant, String)>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fill in the form field by field and predict repeatedly
    Interactive,
    /// Print the category of an AQI value
    Classify {
        /// Air Quality Index value
        #[arg(allow_negative_numbers = true)]
        aqi: f64,
    },
    /// List the pollutant fields and their units
    Fields,
}

impl Cli {
    pub async fn run(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Predict { readings, json } => {
                predict(&settings, readings, json).await?;
            }
            Commands::Interactive => {
                interactive(&settings).await?;
            }
            Commands::Classify { aqi } => {
                classify(aqi);
            }
            Commands::Fields => {
                list_fields();
            }
        }
        Ok(())
    }
}
