//! `/Appointments` endpoints.

use crate::error::ApiError;
use crate::validation;
use crate::AppState;
use api_shared::{
    AppointmentRes, AppointmentSearchParams, CreateAppointmentReq, ErrorRes, MessageRes,
    OwnerParams, UpdateAppointmentReq,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use clinicare_core::models::Appointment;
use clinicare_core::repositories::appointments::AppointmentQuery;
use clinicare_core::Entity;

pub(crate) fn to_res(appointment: Appointment) -> AppointmentRes {
    AppointmentRes {
        id: appointment.id(),
        created_at: appointment.created_at,
        area: appointment.area,
        medical_name: appointment.medical_name,
        date: appointment.date,
        time: appointment.time,
        is_urgent: appointment.is_urgent,
        patient_dni: appointment.patient_dni.to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/Appointments",
    params(AppointmentSearchParams),
    responses(
        (status = 200, description = "Matching appointments", body = [AppointmentRes]),
        (status = 404, description = "No appointment matches", body = ErrorRes)
    )
)]
/// Search appointments by patient DNI, area and medical name. An empty result is a 404.
#[axum::debug_handler]
pub async fn search_appointments(
    State(state): State<AppState>,
    params: Result<Query<AppointmentSearchParams>, QueryRejection>,
) -> Result<Json<Vec<AppointmentRes>>, ApiError> {
    let Query(params) = params?;
    let query = AppointmentQuery {
        patient_dni: params.patient_dni,
        area: params.area,
        medical_name: params.medical_name,
    };
    let appointments = state.clinic.appointments.search(&query)?;
    if appointments.is_empty() {
        return Err(ApiError::NotFound("no appointments match the search".into()));
    }
    Ok(Json(appointments.into_iter().map(to_res).collect()))
}

#[utoipa::path(
    get,
    path = "/Appointments/{id}",
    params(("id" = u32, Path, description = "Appointment identifier")),
    responses(
        (status = 200, description = "Appointment", body = AppointmentRes),
        (status = 404, description = "Unknown identifier", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<AppointmentRes>, ApiError> {
    let Path(id) = id?;
    Ok(Json(to_res(state.clinic.appointments.get(id)?)))
}

#[utoipa::path(
    post,
    path = "/Appointments",
    params(OwnerParams),
    request_body = CreateAppointmentReq,
    responses(
        (status = 200, description = "Appointment created", body = MessageRes),
        (status = 400, description = "Invalid request", body = ErrorRes),
        (status = 404, description = "Unknown patient DNI", body = ErrorRes)
    )
)]
/// Book an appointment for the patient named by the `patientDni` query parameter.
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<AppState>,
    owner: Result<Query<OwnerParams>, QueryRejection>,
    payload: Result<Json<CreateAppointmentReq>, JsonRejection>,
) -> Result<Json<MessageRes>, ApiError> {
    let Query(owner) = owner?;
    let Json(req) = payload?;
    let dni = validation::owner_dni(owner.patient_dni)?;
    let fields = validation::new_appointment(req)?;

    let appointment = state.clinic.appointments.create(&dni, fields)?;
    Ok(Json(MessageRes {
        message: format!("Appointment created for patient with DNI: {}", dni),
        id: Some(appointment.id()),
    }))
}

#[utoipa::path(
    put,
    path = "/Appointments/{id}",
    params(("id" = u32, Path, description = "Appointment identifier")),
    request_body = UpdateAppointmentReq,
    responses(
        (status = 200, description = "Appointment updated", body = MessageRes),
        (status = 400, description = "Invalid request", body = ErrorRes),
        (status = 404, description = "Unknown identifier", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    payload: Result<Json<UpdateAppointmentReq>, JsonRejection>,
) -> Result<Json<MessageRes>, ApiError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let patch = validation::appointment_patch(req)?;

    state.clinic.appointments.update(id, patch)?;
    Ok(Json(MessageRes {
        message: format!("Appointment {} updated", id),
        id: Some(id),
    }))
}

#[utoipa::path(
    delete,
    path = "/Appointments/{id}",
    params(("id" = u32, Path, description = "Appointment identifier")),
    responses(
        (status = 204, description = "Appointment cancelled"),
        (status = 404, description = "Unknown identifier", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.clinic.appointments.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
