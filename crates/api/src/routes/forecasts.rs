use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use log::error;
use std::sync::Arc;

use crate::{weather_data, AppState, ForecastParams, Observation};

#[utoipa::path(
    get,
    path = "/forecasts",
    params(ForecastParams),
    responses(
        (status = OK, description = "Latest forecast per sensor at or before `now`, no older than `then`. Sensors without an eligible observation are omitted; an empty list is a normal result.", body = Vec<Observation>),
        (status = BAD_REQUEST, description = "`now` earlier than `then`, or unparseable datetime"),
    ))]
pub async fn forecasts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<Vec<Observation>>, (StatusCode, String)> {
    let forecasts = state
        .weather_data
        .latest_forecasts(&params)
        .await
        .map_err(|err| match err {
            weather_data::Error::InvertedWindow => {
                error!("rejected forecast query: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        })?;

    Ok(Json(forecasts))
}
