//! Medical record service.
//!
//! Owns the in-memory collection of [`MedicalRecord`]s and the identifier counter for them.
//! Creating a record requires the owning patient to exist; a request for an unknown patient
//! fails before any identifier is allocated.

use crate::filter::Criterion;
use crate::models::{MedicalRecord, MedicalRecordPatch, NewMedicalRecord};
use crate::repositories::patients::PatientDirectory;
use crate::repositories::records::RecordBook;
use crate::storage::{Entity, EntityStore, InMemoryStore};
use crate::{ClinicError, ClinicResult};
use clinicare_types::Dni;
use std::sync::{Arc, Mutex};

/// Optional substring filters for [`MedicalRecordService::search`].
#[derive(Clone, Debug, Default)]
pub struct MedicalRecordQuery {
    pub patient_dni: Option<String>,
    pub doctor_name: Option<String>,
}

pub struct MedicalRecordService<S = InMemoryStore<MedicalRecord>> {
    book: Arc<Mutex<RecordBook<MedicalRecord, S>>>,
    patients: Arc<dyn PatientDirectory>,
}

impl<S> Clone for MedicalRecordService<S> {
    fn clone(&self) -> Self {
        Self {
            book: Arc::clone(&self.book),
            patients: Arc::clone(&self.patients),
        }
    }
}

impl MedicalRecordService {
    /// Creates a service with an empty in-memory collection.
    pub fn new(patients: Arc<dyn PatientDirectory>) -> Self {
        Self {
            book: Arc::new(Mutex::new(RecordBook::empty())),
            patients,
        }
    }
}

impl<S: EntityStore<MedicalRecord>> MedicalRecordService<S> {
    /// Creates a service over an existing store.
    pub fn with_store(patients: Arc<dyn PatientDirectory>, store: S) -> ClinicResult<Self> {
        Ok(Self {
            book: Arc::new(Mutex::new(RecordBook::new(store)?)),
            patients,
        })
    }

    /// Creates a medical record for the patient identified by `owner_dni`.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::NotFound` if no patient is registered under `owner_dni`. In that case
    /// the collection is untouched and no identifier is consumed.
    pub fn create(&self, owner_dni: &Dni, fields: NewMedicalRecord) -> ClinicResult<MedicalRecord> {
        if !self.patients.exists(owner_dni)? {
            tracing::warn!("medical record for unknown patient {}", owner_dni);
            return Err(ClinicError::not_found("patient", owner_dni));
        }

        let record = self
            .book
            .lock()?
            .create_with(|ids| MedicalRecord::new(ids, owner_dni.clone(), fields))?;
        tracing::info!(
            "created medical record {} for patient {}",
            record.id(),
            owner_dni
        );
        Ok(record)
    }

    pub fn get(&self, id: u32) -> ClinicResult<MedicalRecord> {
        self.book.lock()?.get(id)
    }

    /// Applies a partial update to record `id`.
    pub fn update(&self, id: u32, patch: MedicalRecordPatch) -> ClinicResult<MedicalRecord> {
        let record = self.book.lock()?.update_with(id, |r| r.apply(patch))?;
        tracing::info!("updated medical record {}", id);
        Ok(record)
    }

    pub fn delete(&self, id: u32) -> ClinicResult<()> {
        self.book.lock()?.delete(id)?;
        tracing::info!("deleted medical record {}", id);
        Ok(())
    }

    pub fn list(&self) -> ClinicResult<Vec<MedicalRecord>> {
        Ok(self.book.lock()?.list())
    }

    /// Records whose patient DNI and doctor name contain the given terms.
    pub fn search(&self, query: &MedicalRecordQuery) -> ClinicResult<Vec<MedicalRecord>> {
        let criteria = [
            Criterion::new(MedicalRecord::patient_dni_str, query.patient_dni.as_deref()),
            Criterion::new(MedicalRecord::doctor_name_str, query.doctor_name.as_deref()),
        ];
        Ok(self.book.lock()?.search(&criteria))
    }

    /// Validates a batch for [`load`](Self::load) without changing anything.
    pub fn check_load(&self, records: &[MedicalRecord]) -> ClinicResult<()> {
        self.book.lock()?.check_load(records)
    }

    /// Bulk-loads records that already have identifiers and resyncs the counter.
    ///
    /// Identifiers must be at or above [`next_id`](Self::next_id); see
    /// [`RecordBook::check_load`].
    pub fn load(&self, records: Vec<MedicalRecord>) -> ClinicResult<usize> {
        self.book.lock()?.load(records)
    }

    pub fn next_id(&self) -> ClinicResult<u32> {
        Ok(self.book.lock()?.next_id())
    }
}
