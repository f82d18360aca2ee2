mod common;

use axum::http::{Method, StatusCode};
use common::{app, register_patient, send};
use serde_json::json;

fn appointment(area: &str, medic: &str) -> serde_json::Value {
    json!({ "area": area, "medicalName": medic, "date": "2024-06-01", "time": "10:30" })
}

#[tokio::test]
async fn test_book_and_read_appointment() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/Appointments?patientDni=1A",
        Some(appointment("Cardiology", "Dr. Kim")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, body) = send(&app, Method::GET, "/Appointments/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["area"], "Cardiology");
    assert_eq!(body["isUrgent"], false);
    assert_eq!(body["patientDni"], "1A");
}

#[tokio::test]
async fn test_book_for_unknown_patient_is_404() {
    let (app, clinic) = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/Appointments?patientDni=9Z",
        Some(appointment("ER", "Dr. Kim")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(clinic.appointments.next_id().unwrap(), 1);
}

#[tokio::test]
async fn test_search_by_area_and_medic() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;
    for (area, medic) in [("Cardiology", "Dr. Kim"), ("Dermatology", "Dr. Kim"), ("Cardiology", "Dr. Ito")] {
        send(&app, Method::POST, "/Appointments?patientDni=1A", Some(appointment(area, medic))).await;
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/Appointments?area=Cardio&medicalName=Kim",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 1);

    let (status, _) = send(&app, Method::GET, "/Appointments?area=Oncology", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;
    send(&app, Method::POST, "/Appointments?patientDni=1A", Some(appointment("ER", "Dr. Kim"))).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/Appointments/1",
        Some(json!({ "isUrgent": true, "time": "11:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/Appointments/1", None).await;
    assert_eq!(body["isUrgent"], true);
    assert_eq!(body["time"], "11:00");
    assert_eq!(body["medicalName"], "Dr. Kim");
}

#[tokio::test]
async fn test_blank_update_field_is_rejected() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;
    send(&app, Method::POST, "/Appointments?patientDni=1A", Some(appointment("ER", "Dr. Kim"))).await;

    let (status, body) = send(&app, Method::PUT, "/Appointments/1", Some(json!({ "area": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"][0]["field"], "area");
}

#[tokio::test]
async fn test_cancel_appointment() {
    let (app, _) = app();
    register_patient(&app, "1A", "Ruiz").await;
    send(&app, Method::POST, "/Appointments?patientDni=1A", Some(appointment("ER", "Dr. Kim"))).await;

    let (status, _) = send(&app, Method::DELETE, "/Appointments/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, "/Appointments/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_area_parameter_is_json_400() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/Appointments?area=ER&area=ICU", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad-request");
}
