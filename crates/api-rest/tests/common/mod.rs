#![allow(dead_code)]

use api_rest::{router, AppState};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use clinicare_core::Clinic;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn app() -> (Router, Clinic) {
    let clinic = Clinic::new();
    (router(AppState::new(clinic.clone())), clinic)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn register_patient(app: &Router, dni: &str, last_name: &str) {
    let (status, _) = send(
        app,
        Method::POST,
        "/Patients",
        Some(serde_json::json!({ "dni": dni, "firstName": "Ana", "lastName": last_name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}
