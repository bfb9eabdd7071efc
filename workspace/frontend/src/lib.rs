use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod widgets;

use components::prediction::PredictionForm;

#[function_component(App)]
pub fn app() -> Html {
    html! { <PredictionForm /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== AQI Predictor Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction endpoint: {}", settings.predict_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
