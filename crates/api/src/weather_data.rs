use crate::store::Observation;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};
use time::{Duration, OffsetDateTime, UtcOffset};
use utoipa::{IntoParams, ToSchema};
use weathercast_core::Thresholds;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("`now` should not be earlier than `then`")]
    InvertedWindow,
}

/// Query parameters for the latest-forecast lookup
#[derive(Clone, Copy, Debug, Deserialize, IntoParams)]
pub struct ForecastParams {
    /// Time the forecast is requested at (RFC 3339)
    #[serde(with = "time::serde::rfc3339")]
    pub now: OffsetDateTime,
    /// Earliest event time a forecast may still be considered relevant for (RFC 3339)
    #[serde(with = "time::serde::rfc3339")]
    pub then: OffsetDateTime,
}

/// Query parameters for the next-day outlook
#[derive(Clone, Copy, Debug, Deserialize, IntoParams)]
pub struct TomorrowParams {
    /// Time the outlook is requested at (RFC 3339)
    #[serde(with = "time::serde::rfc3339")]
    pub now: OffsetDateTime,
}

/// Boolean condition flags for the next UTC day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TomorrowOutlook {
    pub warm: bool,
    pub sunny: bool,
    pub windy: bool,
}

/// Outlook plus how many observations backed it.
///
/// `samples == 0` means the flags defaulted to false because no
/// observation fell on the target date; callers use it to log an
/// insufficient-data warning. The HTTP body carries only the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TomorrowEvaluation {
    pub outlook: TomorrowOutlook,
    pub samples: usize,
}

#[async_trait]
pub trait WeatherData: Send + Sync {
    /// Latest forecast per sensor with event time in `[then, now]`
    async fn latest_forecasts(&self, req: &ForecastParams) -> Result<Vec<Observation>, Error>;
    /// Threshold flags for the UTC day after `req.now`
    async fn tomorrow_outlook(&self, req: &TomorrowParams) -> Result<TomorrowEvaluation, Error>;
}

/// Read-only access to the observation set loaded at startup.
///
/// Handlers share it through `Arc`; nothing here mutates after
/// construction, so concurrent readers need no coordination.
pub struct WeatherAccess {
    observations: Arc<[Observation]>,
    thresholds: Thresholds,
}

impl WeatherAccess {
    pub fn new(observations: Vec<Observation>, thresholds: Thresholds) -> Self {
        Self {
            observations: observations.into(),
            thresholds,
        }
    }
}

#[async_trait]
impl WeatherData for WeatherAccess {
    async fn latest_forecasts(&self, req: &ForecastParams) -> Result<Vec<Observation>, Error> {
        if req.now < req.then {
            return Err(Error::InvertedWindow);
        }
        Ok(latest_forecasts(&self.observations, req.now, req.then))
    }

    async fn tomorrow_outlook(&self, req: &TomorrowParams) -> Result<TomorrowEvaluation, Error> {
        Ok(evaluate_tomorrow(
            &self.observations,
            req.now,
            &self.thresholds,
        ))
    }
}

/// Select, for each sensor, the single most recent observation with
/// event time in the closed window `[then, now]`.
///
/// Sensors with no eligible row are omitted entirely, never emitted
/// as null; an empty result is a normal outcome. Equal timestamps
/// for the same sensor resolve to the last row in file order. The
/// result is sorted by sensor id.
pub fn latest_forecasts(
    observations: &[Observation],
    now: OffsetDateTime,
    then: OffsetDateTime,
) -> Vec<Observation> {
    let mut latest: BTreeMap<&str, &Observation> = BTreeMap::new();
    for observation in observations {
        if observation.timestamp < then || observation.timestamp > now {
            continue;
        }
        match latest.get(observation.sensor_id.as_str()) {
            Some(current) if current.timestamp > observation.timestamp => {}
            // Later file position wins on equal timestamps
            _ => {
                latest.insert(observation.sensor_id.as_str(), observation);
            }
        }
    }
    latest.into_values().cloned().collect()
}

/// Evaluate the warm/sunny/windy flags for the UTC day after `now`.
///
/// A flag is set when any observation on that date meets or exceeds
/// its threshold. With no observations on the date all flags are
/// false and `samples` is zero.
pub fn evaluate_tomorrow(
    observations: &[Observation],
    now: OffsetDateTime,
    thresholds: &Thresholds,
) -> TomorrowEvaluation {
    let mut outlook = TomorrowOutlook {
        warm: false,
        sunny: false,
        windy: false,
    };

    // `now` at the upper end of the representable range has no next
    // day; treat it like a day without data.
    let Some(tomorrow) = now.to_offset(UtcOffset::UTC).checked_add(Duration::days(1)) else {
        return TomorrowEvaluation {
            outlook,
            samples: 0,
        };
    };
    let target_date = tomorrow.date();

    let mut samples = 0;
    for observation in observations {
        if observation.timestamp.to_offset(UtcOffset::UTC).date() != target_date {
            continue;
        }
        samples += 1;
        outlook.warm |= observation.temperature >= thresholds.warm;
        outlook.sunny |= observation.sun >= thresholds.sunny;
        outlook.windy |= observation.wind >= thresholds.windy;
    }

    TomorrowEvaluation { outlook, samples }
}
