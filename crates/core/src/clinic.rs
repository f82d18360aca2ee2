//! The set of services that make up one running clinic.

use crate::config::CoreConfig;
use crate::repositories::appointments::AppointmentService;
use crate::repositories::medical_records::MedicalRecordService;
use crate::repositories::patients::PatientService;
use crate::seed::{SeedData, SeedSummary};
use crate::ClinicResult;
use std::sync::Arc;

/// Patient registry plus the record services that depend on it.
///
/// Cloning is cheap: clones share the same collections.
#[derive(Clone)]
pub struct Clinic {
    pub patients: PatientService,
    pub medical_records: MedicalRecordService,
    pub appointments: AppointmentService,
}

impl Default for Clinic {
    fn default() -> Self {
        Self::new()
    }
}

impl Clinic {
    /// Creates a clinic with empty collections; identifiers start at 1.
    pub fn new() -> Self {
        let patients = PatientService::new();
        let directory = Arc::new(patients.clone());
        Self {
            medical_records: MedicalRecordService::new(directory.clone()),
            appointments: AppointmentService::new(directory),
            patients,
        }
    }

    /// Creates a clinic and loads the configured seed document, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed document cannot be read, parsed or loaded.
    pub fn from_config(cfg: &CoreConfig) -> ClinicResult<Self> {
        let clinic = Self::new();
        if let Some(path) = cfg.seed_file() {
            let summary = clinic.load_seed(SeedData::from_path(path)?)?;
            tracing::info!(
                "loaded seed {}: {} patients, {} medical records, {} appointments",
                path.display(),
                summary.patients,
                summary.medical_records,
                summary.appointments
            );
        }
        Ok(clinic)
    }

    /// Loads pre-existing entities and resyncs identifier counters past them.
    ///
    /// Every section is validated before anything is inserted: owner references, duplicate
    /// DNIs, and record identifiers that are missing, repeated or already issued. A rejected
    /// document leaves the clinic unchanged.
    ///
    /// # Arguments
    ///
    /// * `seed` - Parsed seed document.
    ///
    /// # Returns
    ///
    /// The number of entities loaded per section.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidInput` if any section is rejected.
    pub fn load_seed(&self, seed: SeedData) -> ClinicResult<SeedSummary> {
        seed.check_owners(&self.patients.list()?)?;
        self.patients.check_load(&seed.patients)?;
        self.medical_records.check_load(&seed.medical_records)?;
        self.appointments.check_load(&seed.appointments)?;

        Ok(SeedSummary {
            patients: self.patients.load(seed.patients)?,
            medical_records: self.medical_records.load(seed.medical_records)?,
            appointments: self.appointments.load(seed.appointments)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewAppointment, NewMedicalRecord};
    use crate::storage::Entity;
    use crate::ClinicError;
    use chrono::Utc;
    use clinicare_types::{Dni, NonEmptyText};
    use std::io::Write;

    const SEED: &str = r#"{
        "patients": [{ "dni": "1A", "firstName": "Ana", "lastName": "Ruiz" }],
        "medicalRecords": [
            { "id": 7, "date": "2024-01-10T09:00:00Z", "doctorName": "Dr. Lee",
              "treatment": "Rest", "patientDni": "1A" },
            { "id": 3, "date": "2024-01-11T09:00:00Z", "doctorName": "Dr. Park",
              "treatment": "Rest" }
        ],
        "appointments": [
            { "id": 12, "createdAt": "2024-01-02T08:00:00Z", "area": "ER",
              "medicalName": "Dr. Kim", "date": "2024-01-12", "time": "10:00",
              "patientDni": "1A" }
        ]
    }"#;

    fn text(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).unwrap()
    }

    #[test]
    fn test_seed_then_create_continues_after_loaded_ids() {
        let clinic = Clinic::new();
        let summary = clinic
            .load_seed(SeedData::from_json_str(SEED).unwrap())
            .unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                patients: 1,
                medical_records: 2,
                appointments: 1
            }
        );

        let owner = Dni::new("1A").unwrap();
        let record = clinic
            .medical_records
            .create(
                &owner,
                NewMedicalRecord {
                    date: Utc::now(),
                    doctor_name: text("Dr. Lee"),
                    treatment: text("Ice"),
                    treatment_cost: None,
                    notes: None,
                },
            )
            .unwrap();
        assert_eq!(record.id(), 8);

        let appointment = clinic
            .appointments
            .create(
                &owner,
                NewAppointment {
                    area: text("ER"),
                    medical_name: text("Dr. Kim"),
                    date: text("2024-02-01"),
                    time: text("08:00"),
                    is_urgent: true,
                },
            )
            .unwrap();
        assert_eq!(appointment.id(), 13);
    }

    #[test]
    fn test_seed_with_unknown_owner_loads_nothing() {
        let clinic = Clinic::new();
        let mut seed = SeedData::from_json_str(SEED).unwrap();
        seed.patients.clear();

        assert!(clinic.load_seed(seed).is_err());
        assert!(clinic.patients.list().unwrap().is_empty());
        assert!(clinic.medical_records.list().unwrap().is_empty());
    }

    #[test]
    fn test_seed_with_bad_appointment_loads_nothing() {
        let clinic = Clinic::new();
        let mut seed = SeedData::from_json_str(SEED).unwrap();
        let repeat = seed.appointments[0].clone();
        seed.appointments.push(repeat);

        let err = clinic.load_seed(seed).unwrap_err();
        assert!(matches!(err, ClinicError::InvalidInput(_)));
        assert!(clinic.patients.list().unwrap().is_empty());
        assert!(clinic.medical_records.list().unwrap().is_empty());
        assert_eq!(clinic.medical_records.next_id().unwrap(), 1);
    }

    #[test]
    fn test_from_config_loads_seed_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let cfg = CoreConfig::new(Some(file.path().to_path_buf())).unwrap();
        let clinic = Clinic::from_config(&cfg).unwrap();
        assert_eq!(clinic.medical_records.list().unwrap().len(), 2);
        assert_eq!(clinic.appointments.next_id().unwrap(), 13);
    }

    #[test]
    fn test_services_share_patient_registry() {
        let clinic = Clinic::new();
        let copy = clinic.clone();
        clinic
            .patients
            .load(SeedData::from_json_str(SEED).unwrap().patients)
            .unwrap();
        assert_eq!(copy.patients.list().unwrap().len(), 1);
    }
}
