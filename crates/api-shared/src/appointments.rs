//! Appointment bodies and query parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string for `GET /Appointments`.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AppointmentSearchParams {
    pub patient_dni: Option<String>,
    pub area: Option<String>,
    pub medical_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentReq {
    pub area: Option<String>,
    pub medical_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub is_urgent: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentReq {
    pub area: Option<String>,
    pub medical_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub is_urgent: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRes {
    pub id: u32,
    pub created_at: DateTime<Utc>,
    pub area: String,
    pub medical_name: String,
    pub date: String,
    pub time: String,
    pub is_urgent: bool,
    pub patient_dni: String,
}
