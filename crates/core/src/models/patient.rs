//! Patient model.
//!
//! Patients are identified by their DNI. Medical records and appointments refer to a patient by
//! that key and never hold the patient itself.

use chrono::{DateTime, NaiveDate, Utc};
use clinicare_types::{Dni, NonEmptyText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub dni: Dni,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPatient {
    pub dni: Dni,
    pub first_name: NonEmptyText,
    pub last_name: NonEmptyText,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

impl Patient {
    pub fn new(fields: NewPatient) -> Self {
        Self {
            dni: fields.dni,
            first_name: fields.first_name.into_inner(),
            last_name: fields.last_name.into_inner(),
            birth_date: fields.birth_date,
            phone: fields.phone.filter(|p| !p.trim().is_empty()),
            created_at: Utc::now(),
        }
    }

    pub(crate) fn dni_str(&self) -> Option<&str> {
        Some(self.dni.as_str())
    }

    pub(crate) fn last_name_str(&self) -> Option<&str> {
        Some(&self.last_name)
    }
}
