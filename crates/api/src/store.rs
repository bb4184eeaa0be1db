use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// A single timestamped measurement row from the weather data file.
///
/// Sourced verbatim from the CSV; never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Observation {
    /// Named source of the measurement
    pub sensor_id: String,
    /// Event time of the forecasted measurement (UTC)
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Sun exposure / irradiance in W/m^2
    pub sun: f64,
    /// Wind speed in m/s
    pub wind: f64,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to open weather data file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed weather data row: {0}")]
    Malformed(#[from] csv::Error),
}

/// Load every observation from the CSV file at `path`.
///
/// The file is a flat delimited table with a header row of
/// `sensor_id,timestamp,temperature,sun,wind`; the column set is an
/// external contract with the data provider. No filtering happens
/// here. Row order is preserved because the query layer breaks
/// equal-timestamp ties by file position.
pub fn load_observations(path: impl AsRef<Path>) -> Result<Vec<Observation>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut observations = Vec::new();
    for row in reader.deserialize() {
        let observation: Observation = row?;
        observations.push(observation);
    }
    Ok(observations)
}
