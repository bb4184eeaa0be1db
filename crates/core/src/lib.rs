//! Weathercast Core Library
//!
//! Shared pieces for the Weathercast API service:
//! - Configuration loading (XDG-compliant)
//! - Condition thresholds

mod config;
mod thresholds;

pub use config::{find_config_file, load_config, ConfigSource};
pub use thresholds::Thresholds;

/// Application name used for XDG paths
pub const APP_NAME: &str = "weathercast";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 9600;

/// Default weather data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "./data/weather.csv";
