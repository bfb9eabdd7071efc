pub mod error;
pub mod loading;

pub use error::ErrorBanner;
pub use loading::LoadingLabel;
