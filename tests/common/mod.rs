use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use suggestion_api::services::suggestion::SuggestionModel;
use suggestion_api::{AppState, build_router};
use tower::ServiceExt;

pub fn test_app() -> Router {
    build_router(AppState::new(SuggestionModel::default()))
}

pub async fn send_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(raw) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let app = app.clone();
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

#[allow(dead_code)]
pub async fn predict(app: &Router, body: &str) -> (StatusCode, serde_json::Value) {
    send_request(app, Method::POST, "/api/predict", Some(body)).await
}
