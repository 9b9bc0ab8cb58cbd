//! Application configuration loaded from files and environment variables.

mod settings;

pub use settings::*;
