pub mod classify;
pub mod fields;
pub mod interactive;
pub mod predict;

pub use classify::classify;
pub use fields::list_fields;
pub use interactive::interactive;
pub use predict::{parse_reading, predict};
