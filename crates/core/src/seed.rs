//! Bulk loading of pre-existing clinic data.
//!
//! A seed document lists patients, medical records and appointments that already carry their
//! identifiers. After loading, each identifier counter is resynced past the highest loaded id so
//! entities created later never collide with loaded ones.
//!
//! ## Format
//!
//! JSON by default, YAML when the file extension is `.yaml` or `.yml`:
//!
//! ```text
//! {
//!   "patients":       [{ "dni": "12345678Z", "firstName": "Ana", "lastName": "Ruiz" }],
//!   "medicalRecords": [{ "id": 7, "date": "2024-01-10T09:00:00Z", "doctorName": "Dr. Lee",
//!                        "treatment": "Rest", "patientDni": "12345678Z" }],
//!   "appointments":   [{ "id": 3, "createdAt": "2024-01-02T08:00:00Z", "area": "ER",
//!                        "medicalName": "Dr. Kim", "date": "2024-01-12", "time": "10:00",
//!                        "patientDni": "12345678Z" }]
//! }
//! ```

use crate::constants::YAML_SEED_EXTENSIONS;
use crate::models::{Appointment, MedicalRecord, Patient};
use crate::{ClinicError, ClinicResult};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub medical_records: Vec<MedicalRecord>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// Counts of entities loaded from a seed document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub patients: usize,
    pub medical_records: usize,
    pub appointments: usize,
}

impl SeedData {
    /// Reads and parses a seed document, choosing the format from the file extension.
    pub fn from_path(path: &Path) -> ClinicResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(ClinicError::SeedRead)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| YAML_SEED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

        if is_yaml {
            Self::from_yaml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    pub fn from_json_str(contents: &str) -> ClinicResult<Self> {
        serde_json::from_str(contents).map_err(ClinicError::SeedParse)
    }

    pub fn from_yaml_str(contents: &str) -> ClinicResult<Self> {
        serde_yaml::from_str(contents).map_err(ClinicError::SeedParseYaml)
    }

    /// Checks that every record and appointment refers to a patient in `known` or in this
    /// document.
    pub(crate) fn check_owners(&self, known: &[Patient]) -> ClinicResult<()> {
        let dnis: HashSet<&str> = known
            .iter()
            .chain(&self.patients)
            .map(|p| p.dni.as_str())
            .collect();

        let record_owners = self
            .medical_records
            .iter()
            .filter_map(|r| r.patient_dni.as_ref());
        let appointment_owners = self.appointments.iter().map(|a| &a.patient_dni);

        for dni in record_owners.chain(appointment_owners) {
            if !dnis.contains(dni.as_str()) {
                return Err(ClinicError::InvalidInput(format!(
                    "seed data refers to unknown patient {}",
                    dni
                )));
            }
        }
        Ok(())
    }
}
