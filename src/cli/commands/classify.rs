use common::classify as classify_index;

/// Prints the category of `aqi`, or why it has none.
pub fn classify(aqi: f64) {
    tracing::debug!("Classifying AQI {}", aqi);
    println!("{}", classify_index(Some(aqi)));
}
