//! `/Patients` endpoints.

use crate::error::ApiError;
use crate::validation;
use crate::AppState;
use api_shared::{CreatePatientReq, ErrorRes, PatientRes, PatientSearchParams};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use clinicare_core::models::Patient;

pub(crate) fn to_res(patient: Patient) -> PatientRes {
    PatientRes {
        dni: patient.dni.to_string(),
        first_name: patient.first_name,
        last_name: patient.last_name,
        birth_date: patient.birth_date,
        phone: patient.phone,
        created_at: patient.created_at,
    }
}

#[utoipa::path(
    get,
    path = "/Patients",
    params(PatientSearchParams),
    responses(
        (status = 200, description = "Matching patients, possibly none", body = [PatientRes])
    )
)]
/// Search patients by DNI and last name.
#[axum::debug_handler]
pub async fn search_patients(
    State(state): State<AppState>,
    params: Result<Query<PatientSearchParams>, QueryRejection>,
) -> Result<Json<Vec<PatientRes>>, ApiError> {
    let Query(params) = params?;
    let patients = state
        .clinic
        .patients
        .search(params.dni.as_deref(), params.last_name.as_deref())?;
    Ok(Json(patients.into_iter().map(to_res).collect()))
}

#[utoipa::path(
    get,
    path = "/Patients/{dni}",
    params(("dni" = String, Path, description = "Patient DNI")),
    responses(
        (status = 200, description = "Patient", body = PatientRes),
        (status = 400, description = "Malformed DNI", body = ErrorRes),
        (status = 404, description = "Unknown DNI", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<AppState>,
    dni: Result<Path<String>, PathRejection>,
) -> Result<Json<PatientRes>, ApiError> {
    let Path(dni) = dni?;
    let dni = validation::path_dni(dni)?;
    Ok(Json(to_res(state.clinic.patients.get_by_dni(&dni)?)))
}

#[utoipa::path(
    post,
    path = "/Patients",
    request_body = CreatePatientReq,
    responses(
        (status = 201, description = "Patient registered", body = PatientRes),
        (status = 400, description = "Invalid request or duplicate DNI", body = ErrorRes)
    )
)]
/// Register a patient. DNIs are unique across the registry.
#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<CreatePatientReq>, JsonRejection>,
) -> Result<(StatusCode, Json<PatientRes>), ApiError> {
    let Json(req) = payload?;
    let fields = validation::new_patient(req)?;

    let patient = state.clinic.patients.register(fields)?;
    Ok((StatusCode::CREATED, Json(to_res(patient))))
}
