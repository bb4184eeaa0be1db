use crate::helpers::{datetime, spawn_app, MockWeatherAccess};
use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use hyper::Method;
use serde_json::{from_slice, Value};
use std::sync::Arc;
use tower::ServiceExt;
use weathercast_api::{TomorrowEvaluation, TomorrowOutlook};

#[tokio::test]
async fn tomorrow_returns_exactly_three_boolean_flags() {
    let mut weather_data = MockWeatherAccess::new();
    weather_data
        .expect_tomorrow_outlook()
        .withf(|req| req.now == datetime("2020-11-03T19:00:00Z"))
        .times(1)
        .returning(|_| {
            Ok(TomorrowEvaluation {
                outlook: TomorrowOutlook {
                    warm: true,
                    sunny: false,
                    windy: true,
                },
                samples: 3,
            })
        });

    let test_app = spawn_app(Arc::new(weather_data)).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/tomorrow?now=2020-11-03T19:00:00Z")
        .body(Body::empty())
        .unwrap();

    let response = test_app
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = from_slice(&body).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert_eq!(object["warm"], Value::Bool(true));
    assert_eq!(object["sunny"], Value::Bool(false));
    assert_eq!(object["windy"], Value::Bool(true));
}

#[tokio::test]
async fn tomorrow_without_data_is_all_false_not_an_error() {
    let mut weather_data = MockWeatherAccess::new();
    weather_data
        .expect_tomorrow_outlook()
        .times(1)
        .returning(|_| {
            Ok(TomorrowEvaluation {
                outlook: TomorrowOutlook {
                    warm: false,
                    sunny: false,
                    windy: false,
                },
                samples: 0,
            })
        });

    let test_app = spawn_app(Arc::new(weather_data)).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/tomorrow?now=2020-11-03T19:00:00Z")
        .body(Body::empty())
        .unwrap();

    let response = test_app
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let outlook: TomorrowOutlook = from_slice(&body).unwrap();
    assert!(!outlook.warm && !outlook.sunny && !outlook.windy);
}

#[tokio::test]
async fn tomorrow_rejects_missing_now() {
    let weather_data = MockWeatherAccess::new();
    let test_app = spawn_app(Arc::new(weather_data)).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/tomorrow")
        .body(Body::empty())
        .unwrap();

    let response = test_app
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}
