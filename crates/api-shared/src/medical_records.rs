//! Medical record bodies and query parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::serde::arbitrary_precision_option;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};

/// Query string for `GET /MedicalRecords`.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MedicalRecordSearchParams {
    /// Substring of the owning patient's DNI.
    pub patient_dni: Option<String>,
    /// Substring of the doctor's name.
    pub doctor_name: Option<String>,
}

/// Query string naming the owning patient on create endpoints.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OwnerParams {
    pub patient_dni: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicalRecordReq {
    /// Visit date; defaults to the time of the request.
    pub created_at: Option<DateTime<Utc>>,
    pub doctor_name: Option<String>,
    pub treatment: Option<String>,
    #[serde(default, with = "arbitrary_precision_option")]
    #[schema(value_type = Option<f64>)]
    pub treatment_cost: Option<Decimal>,
    pub notes: Option<String>,
}

/// Partial update; omitted fields keep their current value.
///
/// `treatmentCost: null` clears the cost, which is different from leaving the field out.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedicalRecordReq {
    pub doctor_name: Option<String>,
    pub treatment: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_cost",
        serialize_with = "serialize_present_cost"
    )]
    #[schema(value_type = Option<f64>)]
    pub treatment_cost: Option<Option<Decimal>>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordRes {
    pub id: u32,
    pub date: DateTime<Utc>,
    pub doctor_name: String,
    pub treatment: String,
    #[serde(default, with = "arbitrary_precision_option")]
    #[schema(value_type = Option<f64>)]
    pub treatment_cost: Option<Decimal>,
    pub notes: String,
    pub patient_dni: Option<String>,
}

/// Reads a cost field that was present in the body, possibly as `null`.
fn present_cost<'de, D>(deserializer: D) -> Result<Option<Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    arbitrary_precision_option::deserialize(deserializer).map(Some)
}

fn serialize_present_cost<S>(value: &Option<Option<Decimal>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(cost) => arbitrary_precision_option::serialize(cost, serializer),
        None => serializer.serialize_none(),
    }
}
