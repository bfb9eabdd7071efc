mod field_input;
mod form;
mod legend;
mod result_card;

pub use form::PredictionForm;
