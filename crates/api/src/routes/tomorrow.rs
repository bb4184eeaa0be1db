use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use log::warn;
use std::sync::Arc;

use crate::{AppState, TomorrowOutlook, TomorrowParams};

#[utoipa::path(
    get,
    path = "/tomorrow",
    params(TomorrowParams),
    responses(
        (status = OK, description = "Whether the next UTC day is expected to be warm, sunny, and windy. All three flags are false when no observation exists for that day.", body = TomorrowOutlook),
        (status = BAD_REQUEST, description = "Unparseable `now` datetime"),
    ))]
pub async fn tomorrow(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TomorrowParams>,
) -> Result<Json<TomorrowOutlook>, (StatusCode, String)> {
    let evaluation = state
        .weather_data
        .tomorrow_outlook(&params)
        .await
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    if evaluation.samples == 0 {
        warn!(
            "no observations for the day after {}, outlook defaults to all-false",
            params.now
        );
    }

    Ok(Json(evaluation.outlook))
}
