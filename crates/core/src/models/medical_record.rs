//! Medical record entity.

use crate::allocator::IdAllocator;
use crate::storage::Entity;
use crate::ClinicResult;
use chrono::{DateTime, Utc};
use clinicare_types::{Dni, NonEmptyText};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single visit entry in a patient's medical history.
///
/// A default-constructed record (as produced when deserialising a partial document) has
/// identifier `0`, meaning "not yet assigned".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    #[serde(default)]
    id: u32,
    /// Visit date. Fixed at creation.
    pub date: DateTime<Utc>,
    pub doctor_name: String,
    pub treatment: String,
    /// Kept exactly as supplied; serialised as a JSON number without passing through `f64`.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub treatment_cost: Option<Decimal>,
    #[serde(default)]
    pub notes: String,
    /// Natural key of the owning patient. The record does not own the patient.
    #[serde(default)]
    pub patient_dni: Option<Dni>,
}

/// Fields supplied when creating a record. The identifier is allocated, not supplied.
#[derive(Debug, Clone)]
pub struct NewMedicalRecord {
    pub date: DateTime<Utc>,
    pub doctor_name: NonEmptyText,
    pub treatment: NonEmptyText,
    pub treatment_cost: Option<Decimal>,
    pub notes: Option<String>,
}

/// Partial update: only the fields that are `Some` change.
///
/// `treatment_cost` is nullable, so it takes two levels: `Some(None)` clears the cost.
#[derive(Debug, Clone, Default)]
pub struct MedicalRecordPatch {
    pub doctor_name: Option<NonEmptyText>,
    pub treatment: Option<NonEmptyText>,
    pub treatment_cost: Option<Option<Decimal>>,
    pub notes: Option<String>,
}

impl MedicalRecord {
    /// Builds a record owned by `patient_dni`, taking the next identifier from `ids`.
    pub fn new(
        ids: &mut IdAllocator,
        patient_dni: Dni,
        fields: NewMedicalRecord,
    ) -> ClinicResult<Self> {
        Ok(Self {
            id: ids.next()?,
            date: fields.date,
            doctor_name: fields.doctor_name.into_inner(),
            treatment: fields.treatment.into_inner(),
            treatment_cost: fields.treatment_cost,
            notes: fields.notes.unwrap_or_default(),
            patient_dni: Some(patient_dni),
        })
    }

    pub fn apply(&mut self, patch: MedicalRecordPatch) {
        if let Some(doctor_name) = patch.doctor_name {
            self.doctor_name = doctor_name.into_inner();
        }
        if let Some(treatment) = patch.treatment {
            self.treatment = treatment.into_inner();
        }
        if let Some(cost) = patch.treatment_cost {
            self.treatment_cost = cost;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }

    pub(crate) fn patient_dni_str(&self) -> Option<&str> {
        self.patient_dni.as_ref().map(Dni::as_str)
    }

    pub(crate) fn doctor_name_str(&self) -> Option<&str> {
        Some(&self.doctor_name)
    }
}

impl Entity for MedicalRecord {
    const NAME: &'static str = "medical record";

    fn id(&self) -> u32 {
        self.id
    }
}
