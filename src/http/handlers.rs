//! API request handlers.

use super::server::AppState;
use crate::error::PedonError;
use crate::observability;
use crate::types::FeatureVector;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

// JSON error helper

fn json_error(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(json!({
            "code": code,
            "message": message,
        })),
    )
        .into_response()
}

/// Handler-level error wrapper mapping [`PedonError`] onto HTTP statuses.
pub struct ApiError(PedonError);

impl From<PedonError> for ApiError {
    fn from(e: PedonError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = if self.0.is_client_error() {
            (StatusCode::BAD_REQUEST, "InvalidInput")
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
        };
        json_error(status, code, &self.0.to_string())
    }
}

// Handlers

pub async fn read_root() -> Response {
    debug!("Root");
    observability::record_api_request("/", 200);

    Json(json!({ "Hello": "World" })).into_response()
}

#[derive(Debug, Deserialize)]
pub struct AddSampleParams {
    pub var1: f64,
    pub var2: f64,
    pub var3: f64,
    pub var4: f64,
}

/// Stub: acknowledges a submitted sample without storing anything.
pub async fn add_sample(Query(params): Query<AddSampleParams>) -> Response {
    debug!(?params, "AddSample");
    observability::record_api_request("/add_sample", 200);

    let message = format!(
        "add {} {} {} {}",
        params.var1, params.var2, params.var3, params.var4
    );
    Json(json!({ "message": message })).into_response()
}

/// Stub: returns a canned training acknowledgement. No model state is
/// touched; the RMSE figure is hardcoded.
pub async fn train() -> Response {
    debug!("Train");
    observability::record_api_request("/train", 200);

    Json(json!({ "message": "Model trained successfully with RMSE: 4.332" })).into_response()
}

/// Stub: returns a canned commit acknowledgement. Loaded models are never
/// replaced.
pub async fn commit() -> Response {
    debug!("Commit");
    observability::record_api_request("/commit", 200);

    Json(json!({ "message": "Model has been updated" })).into_response()
}

/// Query contract for `GET /predict`: a soil type plus the seven sensor
/// readings in their documented order.
#[derive(Debug, Deserialize)]
pub struct PredictParams {
    pub soil_type: String,
    pub temp: f64,
    pub humid: f64,
    pub ph: f64,
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub conductivity: f64,
}

impl PredictParams {
    fn features(&self) -> FeatureVector {
        FeatureVector {
            temperature: self.temp,
            humidity: self.humid,
            ph: self.ph,
            nitrogen: self.n,
            phosphorus: self.p,
            potassium: self.k,
            conductivity: self.conductivity,
        }
    }
}

/// Predict every target property for one sensor reading.
pub async fn predict(
    State(state): State<AppState>,
    Query(params): Query<PredictParams>,
) -> Result<Response, ApiError> {
    debug!(soil_type = %params.soil_type, "Predict");

    let features = params.features();
    match state.dispatcher.predict(&params.soil_type, &features) {
        Ok(predictions) => {
            observability::record_api_request("/predict", 200);
            observability::record_prediction(&params.soil_type);
            Ok(Json(predictions).into_response())
        }
        Err(e) => {
            let status = if e.is_client_error() { 400 } else { 500 };
            observability::record_api_request("/predict", status);
            observability::record_prediction_error();
            Err(e.into())
        }
    }
}
