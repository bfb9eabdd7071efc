//! Text rendering of a form's result for the terminal.

use common::{Classification, FormState};
use serde_json::json;

/// Rounds half up, matching how the browser form displays the index.
pub fn round_index(aqi: f64) -> f64 {
    (aqi + 0.5).floor()
}

/// Human readable result block; empty when there is nothing to show.
pub fn render_result(state: &FormState) -> String {
    match state.prediction {
        None => String::new(),
        Some(aqi) => format!(
            "Air Quality Index: {}\nCategory: {}",
            round_index(aqi),
            state.classification()
        ),
    }
}

/// Machine readable result. `status` is the classification's display text.
pub fn render_json(state: &FormState) -> serde_json::Value {
    let classification = state.classification();
    json!({
        "aqi": state.prediction.filter(|v| v.is_finite()),
        "category": classification.category().map(|c| c.name()),
        "classified": matches!(classification, Classification::Category(_)),
        "status": classification.to_string(),
    })
}
