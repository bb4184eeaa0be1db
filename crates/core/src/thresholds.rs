//! Condition thresholds
//!
//! A condition holds for a forecast value when the value is greater
//! than or equal to its threshold. Loaded once at startup and passed
//! explicitly into the query functions; never ambient global state.

use serde::{Deserialize, Serialize};

/// Default "warm" temperature threshold in degrees Celsius
pub const DEFAULT_WARM_THRESHOLD: f64 = 20.0;

/// Default "sunny" irradiance threshold in W/m^2
pub const DEFAULT_SUNNY_THRESHOLD: f64 = 100.0;

/// Default "windy" wind speed threshold in m/s
pub const DEFAULT_WINDY_THRESHOLD: f64 = 5.5;

/// Numeric cutoffs used to classify next-day conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Temperature at or above which a day counts as warm (Celsius)
    pub warm: f64,
    /// Irradiance at or above which a day counts as sunny (W/m^2)
    pub sunny: f64,
    /// Wind speed at or above which a day counts as windy (m/s)
    pub windy: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warm: DEFAULT_WARM_THRESHOLD,
            sunny: DEFAULT_SUNNY_THRESHOLD,
            windy: DEFAULT_WINDY_THRESHOLD,
        }
    }
}
