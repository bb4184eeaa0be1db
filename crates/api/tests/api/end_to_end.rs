use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use hyper::Method;
use serde_json::from_slice;
use std::io::Write;
use tempfile::NamedTempFile;
use tower::ServiceExt;
use weathercast_api::{app, build_app_state, Observation, TomorrowOutlook};
use weathercast_core::Thresholds;

const FIXTURE_CSV: &str = "\
sensor_id,timestamp,temperature,sun,wind
temperature,2020-11-03T10:00:00+00:00,15.0,0.0,0.0
temperature,2020-11-03T11:00:00+00:00,18.0,0.0,0.0
irradiance,2020-11-03T11:00:00+00:00,0.0,85.0,0.0
wind,2020-11-04T09:00:00+00:00,0.0,0.0,6.94
";

fn fixture_app(thresholds: Thresholds) -> (Router, NamedTempFile) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FIXTURE_CSV.as_bytes()).unwrap();

    let state = build_app_state(file.path().to_str().unwrap(), thresholds).unwrap();
    (app(state), file)
}

async fn get_json_body(app: &Router, uri: &str) -> (u16, Vec<u8>) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");
    let status = response.status().as_u16();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn forecasts_round_trip_from_csv_file() {
    let (app, _file) = fixture_app(Thresholds::default());

    let (status, body) = get_json_body(
        &app,
        "/forecasts?now=2020-11-03T11:30:00Z&then=2020-11-03T09:00:00Z",
    )
    .await;

    assert_eq!(status, 200);
    let forecasts: Vec<Observation> = from_slice(&body).unwrap();
    // Latest row per sensor within the window, sorted by sensor id;
    // the wind sensor only reports on 11-04 and is omitted.
    assert_eq!(forecasts.len(), 2);
    assert_eq!(forecasts[0].sensor_id, "irradiance");
    assert_eq!(forecasts[0].sun, 85.0);
    assert_eq!(forecasts[1].sensor_id, "temperature");
    assert_eq!(forecasts[1].temperature, 18.0);
}

#[tokio::test]
async fn repeated_identical_requests_yield_identical_results() {
    let (app, _file) = fixture_app(Thresholds::default());
    let uri = "/forecasts?now=2020-11-03T11:30:00Z&then=2020-11-03T09:00:00Z";

    let (first_status, first_body) = get_json_body(&app, uri).await;
    let (second_status, second_body) = get_json_body(&app, uri).await;

    assert_eq!(first_status, 200);
    assert_eq!(first_status, second_status);
    assert_eq!(first_body, second_body);
}

#[tokio::test]
async fn tomorrow_round_trip_from_csv_file() {
    let thresholds = Thresholds {
        warm: 20.0,
        sunny: 100.0,
        windy: 6.0,
    };
    let (app, _file) = fixture_app(thresholds);

    // The day after 11-03 only has the wind row at 6.94 m/s.
    let (status, body) = get_json_body(&app, "/tomorrow?now=2020-11-03T19:00:00Z").await;

    assert_eq!(status, 200);
    let outlook: TomorrowOutlook = from_slice(&body).unwrap();
    assert!(!outlook.warm);
    assert!(!outlook.sunny);
    assert!(outlook.windy);
}

#[tokio::test]
async fn missing_data_file_fails_at_startup() {
    let result = build_app_state("/nonexistent/weather.csv", Thresholds::default());
    assert!(result.is_err());
}
