use crate::{
    forecasts, routes, store, tomorrow,
    weather_data::{WeatherAccess, WeatherData},
    Observation, TomorrowOutlook,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use weathercast_core::Thresholds;

#[derive(Clone)]
pub struct AppState {
    pub weather_data: Arc<dyn WeatherData>,
}

#[derive(OpenApi)]
#[openapi(
    paths(routes::forecasts::forecasts, routes::tomorrow::tomorrow),
    components(schemas(Observation, TomorrowOutlook)),
    tags(
        (name = "weathercast api", description = "a read-only RESTful api over CSV weather observations: latest forecast per sensor and next-day condition flags")
    )
)]
struct ApiDoc;

/// Load the observation set and wire up the shared state.
///
/// The CSV is read exactly once here; handlers only ever see the
/// immutable loaded slice.
pub fn build_app_state(data_file: &str, thresholds: Thresholds) -> Result<AppState, anyhow::Error> {
    let observations = store::load_observations(data_file)
        .map_err(|e| anyhow!("error loading weather data: {}", e))?;
    info!(
        "loaded {} observations from {}",
        observations.len(),
        data_file
    );

    let weather_data = Arc::new(WeatherAccess::new(observations, thresholds));

    Ok(AppState { weather_data })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/forecasts", get(forecasts))
        .route("/tomorrow", get(tomorrow))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
