use std::io::{self, BufRead, Write};

use anyhow::Result;
use common::{Pollutant, PredictionFormController, PredictionTransport};
use tracing::{debug, info};

use crate::report::render_result;
use crate::settings::Settings;
use crate::transport::HttpTransport;

/// Typed at a field prompt to empty that field.
pub const CLEAR_FIELD: &str = "-";

/// What to do after a prediction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    Edit,
    Reset,
    Quit,
}

pub async fn interactive(settings: &Settings) -> Result<()> {
    info!("Starting interactive session against {}", settings.endpoint);
    let transport = HttpTransport::new(settings.timeout())?;
    let mut controller = PredictionFormController::new(transport, settings.endpoint.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut controller, &mut stdin.lock(), &mut stdout).await
}

/// Drives the form from line-oriented input until the user quits or input ends.
///
/// Each round prompts for every field showing its current value; an empty
/// line keeps it and [`CLEAR_FIELD`] empties it.
pub async fn run_session<T, R, W>(
    controller: &mut PredictionFormController<T>,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    T: PredictionTransport,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Enter pollutant concentrations to predict Air Quality Index")?;
    writeln!(output, "Predictions from {}", controller.endpoint())?;
    writeln!(output, "Press enter to keep a value, '{}' to clear it.", CLEAR_FIELD)?;

    loop {
        for pollutant in Pollutant::ALL {
            let current = controller.state().fields.get(pollutant).to_string();
            write!(output, "{} [{}]: ", pollutant.label(), current)?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            if line == CLEAR_FIELD {
                controller.update_field(pollutant, "");
            } else if !line.is_empty() {
                controller.update_field(pollutant, line);
            }
        }

        writeln!(output, "Predicting...")?;
        controller.submit().await;

        let state = controller.state();
        if state.has_error() {
            writeln!(output, "{}", state.error)?;
        }
        let result = render_result(state);
        if !result.is_empty() {
            writeln!(output, "{}", result)?;
        }

        match prompt_next_step(input, output)? {
            NextStep::Edit => debug!("Editing current readings"),
            NextStep::Reset => {
                debug!("Resetting form");
                controller.reset();
            }
            NextStep::Quit => return Ok(()),
        }
    }
}

fn prompt_next_step<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<NextStep> {
    loop {
        write!(output, "[p]redict again, [r]eset, [q]uit: ")?;
        output.flush()?;

        let Some(answer) = read_line(input)? else {
            return Ok(NextStep::Quit);
        };
        match answer.to_lowercase().as_str() {
            "p" | "predict" => return Ok(NextStep::Edit),
            "r" | "reset" => return Ok(NextStep::Reset),
            "q" | "quit" => return Ok(NextStep::Quit),
            other => writeln!(output, "Unrecognised choice '{}'", other)?,
        }
    }
}

/// Reads one trimmed line, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
