use anyhow::Context;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    routing::post,
};
use serde_json::Value;

use crate::error::Result;
use crate::models::suggestion::PredictResponse;

pub fn router() -> Router<crate::AppState> {
    Router::new()
        .route("/api/predict", post(predict))
        .layer(DefaultBodyLimit::disable())
}

async fn predict(
    State(state): State<crate::AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<PredictResponse>> {
    let body = body.context("Failed to read request body")?;
    let task: Value = serde_json::from_slice(&body).context("Request body is not valid JSON")?;
    let suggestions = state.model.predict(&task)?;

    Ok(Json(PredictResponse { suggestions }))
}
