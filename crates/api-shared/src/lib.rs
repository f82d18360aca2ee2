//! # API Shared
//!
//! Request and response types for the CliniCare HTTP API.
//!
//! Contains:
//! - JSON bodies and query-string parameters (`serde` + `utoipa` schemas)
//! - Shared services like `HealthService`
//!
//! Field names on the wire are camelCase. Request fields are optional so that missing values
//! reach validation and are reported per field instead of failing deserialisation.

pub mod appointments;
pub mod health;
pub mod medical_records;
pub mod patients;

pub use appointments::*;
pub use health::HealthService;
pub use medical_records::*;
pub use patients::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Confirmation returned by create and update endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
    /// Identifier of the created or updated entity, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

/// One rejected request field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorRes {
    pub field: String,
    pub message: String,
}

/// Error body for every non-2xx response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    /// Error kind: `validation`, `not-found` or `bad-request`.
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldErrorRes>,
}
