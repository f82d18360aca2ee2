//! Patient registry.
//!
//! Patients are looked up by DNI. The record services only need to know whether a patient
//! exists, so they depend on the [`PatientDirectory`] trait rather than on [`PatientService`].

use crate::filter::{self, Criterion};
use crate::models::{NewPatient, Patient};
use crate::{ClinicError, ClinicResult};
use clinicare_types::Dni;
use std::sync::{Arc, Mutex};

/// Read-only view of the patients known to the clinic.
pub trait PatientDirectory: Send + Sync {
    /// Returns true if a patient is registered under `dni`.
    fn exists(&self, dni: &Dni) -> ClinicResult<bool>;
}

/// In-memory patient registry, cheap to clone and share between handlers.
#[derive(Clone, Debug, Default)]
pub struct PatientService {
    patients: Arc<Mutex<Vec<Patient>>>,
}

impl PatientService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new patient.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidInput` if a patient with the same DNI already exists.
    pub fn register(&self, fields: NewPatient) -> ClinicResult<Patient> {
        let mut patients = self.patients.lock()?;
        if patients.iter().any(|p| p.dni == fields.dni) {
            return Err(ClinicError::InvalidInput(format!(
                "a patient with DNI {} already exists",
                fields.dni
            )));
        }

        let patient = Patient::new(fields);
        tracing::info!("registered patient {}", patient.dni);
        patients.push(patient.clone());
        Ok(patient)
    }

    pub fn get_by_dni(&self, dni: &Dni) -> ClinicResult<Patient> {
        self.patients
            .lock()?
            .iter()
            .find(|p| &p.dni == dni)
            .cloned()
            .ok_or_else(|| ClinicError::not_found("patient", dni))
    }

    pub fn list(&self) -> ClinicResult<Vec<Patient>> {
        Ok(self.patients.lock()?.clone())
    }

    /// Substring search on DNI and last name. Blank terms are ignored.
    pub fn search(&self, dni: Option<&str>, last_name: Option<&str>) -> ClinicResult<Vec<Patient>> {
        let criteria = [
            Criterion::new(Patient::dni_str, dni),
            Criterion::new(Patient::last_name_str, last_name),
        ];
        Ok(filter::filter(self.patients.lock()?.iter(), &criteria))
    }

    /// Checks a batch for [`load`](Self::load): no DNI may repeat within the batch or match a
    /// registered patient.
    pub fn check_load(&self, batch: &[Patient]) -> ClinicResult<()> {
        check_unique(&self.patients.lock()?, batch)
    }

    /// Adds pre-existing patients, rejecting the whole batch on any duplicate DNI.
    pub fn load(&self, batch: Vec<Patient>) -> ClinicResult<usize> {
        let mut patients = self.patients.lock()?;
        check_unique(&patients, &batch)?;

        let loaded = batch.len();
        patients.extend(batch);
        Ok(loaded)
    }
}

fn check_unique(registered: &[Patient], batch: &[Patient]) -> ClinicResult<()> {
    for (i, patient) in batch.iter().enumerate() {
        let repeated = batch[..i].iter().any(|p| p.dni == patient.dni)
            || registered.iter().any(|p| p.dni == patient.dni);
        if repeated {
            return Err(ClinicError::InvalidInput(format!(
                "duplicate patient DNI {}",
                patient.dni
            )));
        }
    }
    Ok(())
}

impl PatientDirectory for PatientService {
    fn exists(&self, dni: &Dni) -> ClinicResult<bool> {
        Ok(self.patients.lock()?.iter().any(|p| &p.dni == dni))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinicare_types::NonEmptyText;

    fn new_patient(dni: &str, last_name: &str) -> NewPatient {
        NewPatient {
            dni: Dni::new(dni).unwrap(),
            first_name: NonEmptyText::new("Ana").unwrap(),
            last_name: NonEmptyText::new(last_name).unwrap(),
            birth_date: None,
            phone: None,
        }
    }

    #[test]
    fn test_register_then_lookup() {
        let service = PatientService::new();
        service.register(new_patient("123A", "Ruiz")).unwrap();

        let dni = Dni::new("123A").unwrap();
        assert!(service.exists(&dni).unwrap());
        assert_eq!(service.get_by_dni(&dni).unwrap().last_name, "Ruiz");
    }

    #[test]
    fn test_register_duplicate_dni_is_rejected() {
        let service = PatientService::new();
        service.register(new_patient("123A", "Ruiz")).unwrap();
        let err = service.register(new_patient("123A", "Soto")).unwrap_err();
        assert!(matches!(err, ClinicError::InvalidInput(_)));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_get_unknown_dni_is_not_found() {
        let service = PatientService::new();
        let err = service.get_by_dni(&Dni::new("999").unwrap()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_search_by_last_name() {
        let service = PatientService::new();
        service.register(new_patient("1", "Ruiz")).unwrap();
        service.register(new_patient("2", "Ortega")).unwrap();

        let found = service.search(None, Some("Ort")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].dni.as_str(), "2");
    }

    #[test]
    fn test_load_rejects_duplicate_within_batch() {
        let service = PatientService::new();
        let a = Patient::new(new_patient("1", "Ruiz"));
        let b = Patient::new(new_patient("1", "Soto"));
        assert!(service.load(vec![a, b]).is_err());
        assert!(service.list().unwrap().is_empty());
    }
}
