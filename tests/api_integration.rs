//! Prediction API integration tests
//!
//! Drives the real router in-process with a stub-model registry.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pedon::http::{router, AppState};
use pedon::model::{ModelRegistry, PredictionDispatcher, Regressor};
use pedon::types::FeatureVector;
use std::sync::Arc;
use tower::ServiceExt;

struct ConstantModel(f64);

impl Regressor for ConstantModel {
    fn predict(&self, _features: &FeatureVector) -> f64 {
        self.0
    }
}

fn test_app(value: f64) -> Router {
    let registry = ModelRegistry::from_loader(|_, _| Box::new(ConstantModel(value)));
    let dispatcher = Arc::new(PredictionDispatcher::new(Arc::new(registry)));
    router(AppState { dispatcher })
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

// =============================================================================
// Root Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_returns_literal_payload() {
    let (status, body) = send(test_app(1.0), "GET", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "Hello": "World" }));
}

// =============================================================================
// Prediction Tests
// =============================================================================

const CLAY_QUERY: &str =
    "/predict?soil_type=clay&temp=25.0&humid=40.0&ph=6.5&n=12.0&p=8.0&k=15.0&conductivity=200.0";

#[tokio::test]
async fn test_predict_clay_returns_every_target() {
    let (status, body) = send(test_app(1.0), "GET", CLAY_QUERY).await;

    assert_eq!(status, StatusCode::OK);
    let map = body.as_object().unwrap();
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys.len(), 5);
    for key in ["lab_pH", "lab_N", "lab_P", "lab_K", "lab_EC"] {
        assert_eq!(map.get(key).and_then(|v| v.as_f64()), Some(1.0));
    }
}

#[tokio::test]
async fn test_predict_every_supported_soil_type() {
    for soil_type in ["clay", "sand", "silt"] {
        let uri = format!(
            "/predict?soil_type={}&temp=20.0&humid=55.0&ph=7.0&n=10.0&p=5.0&k=11.0&conductivity=150.0",
            soil_type
        );
        let (status, body) = send(test_app(2.5), "GET", &uri).await;

        assert_eq!(status, StatusCode::OK, "soil_type={}", soil_type);
        assert_eq!(body.as_object().unwrap().len(), 5);
    }
}

#[tokio::test]
async fn test_predict_unrecognized_soil_type_is_400() {
    let uri =
        "/predict?soil_type=loam&temp=25.0&humid=40.0&ph=6.5&n=12.0&p=8.0&k=15.0&conductivity=200.0";
    let (status, body) = send(test_app(1.0), "GET", uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "InvalidInput");
    assert!(body["message"].as_str().unwrap().contains("loam"));
    // No prediction payload alongside the error
    assert!(body.get("lab_pH").is_none());
}

#[tokio::test]
async fn test_predict_missing_feature_is_rejected() {
    // conductivity omitted: the feature contract is exactly seven values
    let uri = "/predict?soil_type=clay&temp=25.0&humid=40.0&ph=6.5&n=12.0&p=8.0&k=15.0";
    let (status, _) = send(test_app(1.0), "GET", uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_is_deterministic() {
    let (_, first) = send(test_app(3.25), "GET", CLAY_QUERY).await;
    let (_, second) = send(test_app(3.25), "GET", CLAY_QUERY).await;

    assert_eq!(first, second);
}

// =============================================================================
// Stub Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_add_sample_echoes_values() {
    let (status, body) = send(
        test_app(1.0),
        "POST",
        "/add_sample?var1=1.5&var2=2&var3=3.25&var4=4",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "add 1.5 2 3.25 4");
}

#[tokio::test]
async fn test_train_returns_canned_ack() {
    let (status, body) = send(test_app(1.0), "POST", "/train").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Model trained successfully with RMSE: 4.332");
}

#[tokio::test]
async fn test_commit_returns_canned_ack() {
    let (status, body) = send(test_app(1.0), "POST", "/commit").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Model has been updated");
}

#[tokio::test]
async fn test_stubs_do_not_disturb_predictions() {
    let app = test_app(1.0);

    let (status, _) = send(app.clone(), "POST", "/train").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(app.clone(), "POST", "/commit").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app, "GET", CLAY_QUERY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lab_pH"], 1.0);
}
