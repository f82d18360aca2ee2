//! `/MedicalRecords` endpoints.

use crate::error::ApiError;
use crate::validation;
use crate::AppState;
use api_shared::{
    CreateMedicalRecordReq, ErrorRes, MedicalRecordRes, MedicalRecordSearchParams, MessageRes,
    OwnerParams, UpdateMedicalRecordReq,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use clinicare_core::models::MedicalRecord;
use clinicare_core::repositories::medical_records::MedicalRecordQuery;
use clinicare_core::Entity;

pub(crate) fn to_res(record: MedicalRecord) -> MedicalRecordRes {
    MedicalRecordRes {
        id: record.id(),
        date: record.date,
        doctor_name: record.doctor_name,
        treatment: record.treatment,
        treatment_cost: record.treatment_cost,
        notes: record.notes,
        patient_dni: record.patient_dni.map(|dni| dni.to_string()),
    }
}

#[utoipa::path(
    get,
    path = "/MedicalRecords",
    params(MedicalRecordSearchParams),
    responses(
        (status = 200, description = "Matching medical records", body = [MedicalRecordRes]),
        (status = 404, description = "No medical record matches", body = ErrorRes)
    )
)]
/// Search medical records by patient DNI and doctor name.
///
/// Both filters are optional substring matches and must all hold. An empty result is reported
/// as `404 Not Found`.
#[axum::debug_handler]
pub async fn search_medical_records(
    State(state): State<AppState>,
    params: Result<Query<MedicalRecordSearchParams>, QueryRejection>,
) -> Result<Json<Vec<MedicalRecordRes>>, ApiError> {
    let Query(params) = params?;
    let query = MedicalRecordQuery {
        patient_dni: params.patient_dni,
        doctor_name: params.doctor_name,
    };
    let records = state.clinic.medical_records.search(&query)?;
    if records.is_empty() {
        return Err(ApiError::NotFound(
            "no medical records match the search".into(),
        ));
    }
    Ok(Json(records.into_iter().map(to_res).collect()))
}

#[utoipa::path(
    get,
    path = "/MedicalRecords/{id}",
    params(("id" = u32, Path, description = "Medical record identifier")),
    responses(
        (status = 200, description = "Medical record", body = MedicalRecordRes),
        (status = 404, description = "Unknown identifier", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_medical_record(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<MedicalRecordRes>, ApiError> {
    let Path(id) = id?;
    let record = state.clinic.medical_records.get(id)?;
    Ok(Json(to_res(record)))
}

#[utoipa::path(
    post,
    path = "/MedicalRecords",
    params(OwnerParams),
    request_body = CreateMedicalRecordReq,
    responses(
        (status = 200, description = "Medical record created", body = MessageRes),
        (status = 400, description = "Invalid request", body = ErrorRes),
        (status = 404, description = "Unknown patient DNI", body = ErrorRes)
    )
)]
/// Create a medical record for the patient named by the `patientDni` query parameter.
#[axum::debug_handler]
pub async fn create_medical_record(
    State(state): State<AppState>,
    owner: Result<Query<OwnerParams>, QueryRejection>,
    payload: Result<Json<CreateMedicalRecordReq>, JsonRejection>,
) -> Result<Json<MessageRes>, ApiError> {
    let Query(owner) = owner?;
    let Json(req) = payload?;
    let dni = validation::owner_dni(owner.patient_dni)?;
    let fields = validation::new_medical_record(req)?;

    let record = state.clinic.medical_records.create(&dni, fields)?;
    Ok(Json(MessageRes {
        message: format!("Medical record created for patient with DNI: {}", dni),
        id: Some(record.id()),
    }))
}

#[utoipa::path(
    put,
    path = "/MedicalRecords/{id}",
    params(("id" = u32, Path, description = "Medical record identifier")),
    request_body = UpdateMedicalRecordReq,
    responses(
        (status = 200, description = "Medical record updated", body = MessageRes),
        (status = 400, description = "Invalid request", body = ErrorRes),
        (status = 404, description = "Unknown identifier", body = ErrorRes)
    )
)]
/// Update the supplied fields of a medical record; omitted fields are left unchanged.
#[axum::debug_handler]
pub async fn update_medical_record(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    payload: Result<Json<UpdateMedicalRecordReq>, JsonRejection>,
) -> Result<Json<MessageRes>, ApiError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let patch = validation::medical_record_patch(req)?;

    state.clinic.medical_records.update(id, patch)?;
    Ok(Json(MessageRes {
        message: format!("Medical record {} updated", id),
        id: Some(id),
    }))
}

#[utoipa::path(
    delete,
    path = "/MedicalRecords/{id}",
    params(("id" = u32, Path, description = "Medical record identifier")),
    responses(
        (status = 204, description = "Medical record deleted"),
        (status = 404, description = "Unknown identifier", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn delete_medical_record(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.clinic.medical_records.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
