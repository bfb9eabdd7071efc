use anyhow::{Result, bail};
use common::{FormState, Pollutant, PredictionFormController, PredictionTransport};
use tracing::{debug, info, trace};

use crate::report::{render_json, render_result};
use crate::settings::Settings;
use crate::transport::HttpTransport;

/// Parses a `KEY=VALUE` reading. The value is kept verbatim and may be empty.
pub fn parse_reading(s: &str) -> Result<(Pollutant, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let pollutant = key.parse::<Pollutant>().map_err(|e| e.to_string())?;
    Ok((pollutant, value.trim().to_string()))
}

/// Fills a form from `readings` and submits it once.
pub async fn run_prediction<T: PredictionTransport>(
    transport: T,
    endpoint: &str,
    readings: Vec<(Pollutant, String)>,
) -> FormState {
    let mut controller = PredictionFormController::new(transport, endpoint);
    for (pollutant, value) in readings {
        trace!("Setting {} = {:?}", pollutant, value);
        controller.update_field(pollutant, value);
    }
    controller.submit().await;
    controller.state().clone()
}

pub async fn predict(settings: &Settings, readings: Vec<(Pollutant, String)>, json: bool) -> Result<()> {
    info!("Requesting prediction from {}", settings.endpoint);
    debug!("{} reading(s) given", readings.len());

    let transport = HttpTransport::new(settings.timeout())?;
    let state = run_prediction(transport, &settings.endpoint, readings).await;

    if state.has_error() {
        bail!("{}", state.error);
    }

    if json {
        println!("{}", render_json(&state));
    } else if state.prediction.is_some() {
        println!("{}", render_result(&state));
    } else {
        println!("The service returned no prediction.");
    }
    Ok(())
}
