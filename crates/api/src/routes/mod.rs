pub mod forecasts;
pub mod tomorrow;

pub use forecasts::*;
pub use tomorrow::*;
