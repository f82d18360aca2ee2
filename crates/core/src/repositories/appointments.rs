//! Appointment service.

use crate::filter::Criterion;
use crate::models::{Appointment, AppointmentPatch, NewAppointment};
use crate::repositories::patients::PatientDirectory;
use crate::repositories::records::RecordBook;
use crate::storage::{Entity, EntityStore, InMemoryStore};
use crate::{ClinicError, ClinicResult};
use clinicare_types::Dni;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, Default)]
pub struct AppointmentQuery {
    pub patient_dni: Option<String>,
    pub area: Option<String>,
    pub medical_name: Option<String>,
}

/// Owns the appointment collection and its identifier counter.
///
/// Same contract as [`MedicalRecordService`](super::medical_records::MedicalRecordService):
/// creation needs a registered patient, and update/delete of an unknown id is `NotFound`.
pub struct AppointmentService<S = InMemoryStore<Appointment>> {
    book: Arc<Mutex<RecordBook<Appointment, S>>>,
    patients: Arc<dyn PatientDirectory>,
}

impl<S> Clone for AppointmentService<S> {
    fn clone(&self) -> Self {
        Self {
            book: Arc::clone(&self.book),
            patients: Arc::clone(&self.patients),
        }
    }
}

impl AppointmentService {
    pub fn new(patients: Arc<dyn PatientDirectory>) -> Self {
        Self {
            book: Arc::new(Mutex::new(RecordBook::empty())),
            patients,
        }
    }
}

impl<S: EntityStore<Appointment>> AppointmentService<S> {
    pub fn with_store(patients: Arc<dyn PatientDirectory>, store: S) -> ClinicResult<Self> {
        Ok(Self {
            book: Arc::new(Mutex::new(RecordBook::new(store)?)),
            patients,
        })
    }

    /// Books an appointment for `owner_dni`.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::NotFound` if the patient does not exist.
    pub fn create(&self, owner_dni: &Dni, fields: NewAppointment) -> ClinicResult<Appointment> {
        if !self.patients.exists(owner_dni)? {
            tracing::warn!("appointment for unknown patient {}", owner_dni);
            return Err(ClinicError::not_found("patient", owner_dni));
        }

        let appointment = self
            .book
            .lock()?
            .create_with(|ids| Appointment::new(ids, owner_dni.clone(), fields))?;
        tracing::info!(
            "created appointment {} for patient {} (urgent: {})",
            appointment.id(),
            owner_dni,
            appointment.is_urgent
        );
        Ok(appointment)
    }

    pub fn get(&self, id: u32) -> ClinicResult<Appointment> {
        self.book.lock()?.get(id)
    }

    pub fn update(&self, id: u32, patch: AppointmentPatch) -> ClinicResult<Appointment> {
        let appointment = self.book.lock()?.update_with(id, |a| a.apply(patch))?;
        tracing::info!("updated appointment {}", id);
        Ok(appointment)
    }

    pub fn delete(&self, id: u32) -> ClinicResult<()> {
        self.book.lock()?.delete(id)?;
        tracing::info!("deleted appointment {}", id);
        Ok(())
    }

    pub fn list(&self) -> ClinicResult<Vec<Appointment>> {
        Ok(self.book.lock()?.list())
    }

    pub fn search(&self, query: &AppointmentQuery) -> ClinicResult<Vec<Appointment>> {
        let criteria = [
            Criterion::new(Appointment::patient_dni_str, query.patient_dni.as_deref()),
            Criterion::new(Appointment::area_str, query.area.as_deref()),
            Criterion::new(Appointment::medical_name_str, query.medical_name.as_deref()),
        ];
        Ok(self.book.lock()?.search(&criteria))
    }

    pub fn check_load(&self, appointments: &[Appointment]) -> ClinicResult<()> {
        self.book.lock()?.check_load(appointments)
    }

    pub fn load(&self, appointments: Vec<Appointment>) -> ClinicResult<usize> {
        self.book.lock()?.load(appointments)
    }

    pub fn next_id(&self) -> ClinicResult<u32> {
        Ok(self.book.lock()?.next_id())
    }
}
