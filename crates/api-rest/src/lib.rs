//! # API REST
//!
//! REST API implementation for CliniCare.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - Request validation and error-to-status mapping
//!
//! Uses `api-shared` for wire types and `clinicare-core` for all state.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;
pub mod validation;

use axum::{routing::get, Router};
use clinicare_core::Clinic;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use handlers::{appointments, health, medical_records, patients};

pub use error::ApiError;

/// Application state shared across REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub(crate) clinic: Clinic,
}

impl AppState {
    pub fn new(clinic: Clinic) -> Self {
        Self { clinic }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        medical_records::search_medical_records,
        medical_records::get_medical_record,
        medical_records::create_medical_record,
        medical_records::update_medical_record,
        medical_records::delete_medical_record,
        appointments::search_appointments,
        appointments::get_appointment,
        appointments::create_appointment,
        appointments::update_appointment,
        appointments::delete_appointment,
        patients::search_patients,
        patients::get_patient,
        patients::create_patient,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::MessageRes,
        api_shared::ErrorRes,
        api_shared::FieldErrorRes,
        api_shared::CreateMedicalRecordReq,
        api_shared::UpdateMedicalRecordReq,
        api_shared::MedicalRecordRes,
        api_shared::CreateAppointmentReq,
        api_shared::UpdateAppointmentReq,
        api_shared::AppointmentRes,
        api_shared::CreatePatientReq,
        api_shared::PatientRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI, permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/MedicalRecords",
            get(medical_records::search_medical_records)
                .post(medical_records::create_medical_record),
        )
        .route(
            "/MedicalRecords/:id",
            get(medical_records::get_medical_record)
                .put(medical_records::update_medical_record)
                .delete(medical_records::delete_medical_record),
        )
        .route(
            "/Appointments",
            get(appointments::search_appointments).post(appointments::create_appointment),
        )
        .route(
            "/Appointments/:id",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .delete(appointments::delete_appointment),
        )
        .route(
            "/Patients",
            get(patients::search_patients).post(patients::create_patient),
        )
        .route("/Patients/:dni", get(patients::get_patient))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
