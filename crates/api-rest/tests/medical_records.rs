mod common;

use axum::http::{Method, StatusCode};
use common::{app, register_patient, send};
use serde_json::json;

fn record(doctor: &str) -> serde_json::Value {
    json!({ "doctorName": doctor, "treatment": "Rest", "treatmentCost": 120.5, "notes": "follow up" })
}

#[tokio::test]
async fn test_create_then_get_medical_record() {
    let (app, _) = app();
    register_patient(&app, "12345678A", "Ruiz").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/MedicalRecords?patientDni=12345678A",
        Some(record("Dr. Lee")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Medical record created for patient with DNI: 12345678A"
    );
    assert_eq!(body["id"], 1);

    let (status, body) = send(&app, Method::GET, "/MedicalRecords/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["doctorName"], "Dr. Lee");
    assert_eq!(body["patientDni"], "12345678A");
    assert_eq!(body["treatmentCost"].to_string(), "120.5");
}

#[tokio::test]
async fn test_create_for_unknown_patient_is_404_and_consumes_no_id() {
    let (app, clinic) = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/MedicalRecords?patientDni=NOPE",
        Some(record("Dr. Lee")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not-found");
    assert_eq!(clinic.medical_records.next_id().unwrap(), 1);
}

#[tokio::test]
async fn test_create_reports_missing_fields() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/MedicalRecords?patientDni=1A",
        Some(json!({ "notes": "nothing else" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
    assert_eq!(body["fields"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_without_owner_is_400() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::POST, "/MedicalRecords", Some(record("Dr. Lee"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"][0]["field"], "patientDni");
}

#[tokio::test]
async fn test_search_filters_and_reports_empty_as_404() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;
    register_patient(&app, "2B", "Soto").await;
    for (owner, doctor) in [("1A", "Dr. Lee"), ("2B", "Dr. Lee"), ("1A", "Dr. Park")] {
        let uri = format!("/MedicalRecords?patientDni={}", owner);
        let (status, _) = send(&app, Method::POST, &uri, Some(record(doctor))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/MedicalRecords?patientDni=1A&doctorName=Lee",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1]);

    let (status, body) = send(&app, Method::GET, "/MedicalRecords", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = send(&app, Method::GET, "/MedicalRecords?doctorName=House", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_and_delete_medical_record() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;
    send(&app, Method::POST, "/MedicalRecords?patientDni=1A", Some(record("Dr. Lee"))).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/MedicalRecords/1",
        Some(json!({ "treatment": "Physio" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/MedicalRecords/1", None).await;
    assert_eq!(body["treatment"], "Physio");
    assert_eq!(body["doctorName"], "Dr. Lee");

    let (status, _) = send(&app, Method::DELETE, "/MedicalRecords/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, "/MedicalRecords/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::POST, "/MedicalRecords?patientDni=1A", Some(record("Dr. Lee"))).await;
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn test_update_unknown_record_is_404() {
    let (app, _) = app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/MedicalRecords/99",
        Some(json!({ "notes": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/MedicalRecords/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad-request");
}

#[tokio::test]
async fn test_cost_round_trips_without_rounding() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;

    let body = r#"{"doctorName":"Dr. Lee","treatment":"Surgery","treatmentCost":12345678901234567.89}"#;
    let (status, _) = send(
        &app,
        Method::POST,
        "/MedicalRecords?patientDni=1A",
        Some(serde_json::from_str(body).unwrap()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/MedicalRecords/1", None).await;
    assert_eq!(body["treatmentCost"].to_string(), "12345678901234567.89");
}

#[tokio::test]
async fn test_null_cost_in_update_clears_it() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;
    send(&app, Method::POST, "/MedicalRecords?patientDni=1A", Some(record("Dr. Lee"))).await;

    let (status, _) = send(&app, Method::PUT, "/MedicalRecords/1", Some(json!({ "notes": "seen" }))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, Method::GET, "/MedicalRecords/1", None).await;
    assert_eq!(body["treatmentCost"].to_string(), "120.5");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/MedicalRecords/1",
        Some(json!({ "treatmentCost": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, Method::GET, "/MedicalRecords/1", None).await;
    assert!(body["treatmentCost"].is_null());
    assert_eq!(body["notes"], "seen");
}

#[tokio::test]
async fn test_repeated_query_parameter_is_json_400() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/MedicalRecords?patientDni=1A&patientDni=2B",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad-request");

    let (status, body) = send(
        &app,
        Method::POST,
        "/MedicalRecords?patientDni=1A&patientDni=1A",
        Some(record("Dr. Lee")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad-request");
}
