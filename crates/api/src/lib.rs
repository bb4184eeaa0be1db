pub mod routes;
pub mod startup;
pub mod store;
pub mod utils;
pub mod weather_data;

pub use routes::*;
pub use startup::{app, build_app_state, AppState};
pub use store::Observation;
pub use utils::{get_config_info, get_log_level, setup_logger, Cli};
pub use weather_data::{
    ForecastParams, TomorrowEvaluation, TomorrowOutlook, TomorrowParams, WeatherAccess, WeatherData,
};
