//! Application configuration and constants.

pub mod constants;
mod settings;

pub use constants::*;
pub use settings::Settings;
