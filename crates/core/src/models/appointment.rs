//! Appointment entity.

use crate::allocator::IdAllocator;
use crate::storage::Entity;
use crate::ClinicResult;
use chrono::{DateTime, Utc};
use clinicare_types::{Dni, NonEmptyText};
use serde::{Deserialize, Serialize};

/// A booked slot with a member of medical staff.
///
/// `date` and `time` are kept as the strings the client supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default)]
    id: u32,
    pub created_at: DateTime<Utc>,
    pub area: String,
    pub medical_name: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub is_urgent: bool,
    pub patient_dni: Dni,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub area: NonEmptyText,
    pub medical_name: NonEmptyText,
    pub date: NonEmptyText,
    pub time: NonEmptyText,
    pub is_urgent: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentPatch {
    pub area: Option<NonEmptyText>,
    pub medical_name: Option<NonEmptyText>,
    pub date: Option<NonEmptyText>,
    pub time: Option<NonEmptyText>,
    pub is_urgent: Option<bool>,
}

impl Appointment {
    /// Builds an appointment for `patient_dni`, stamped with the current time.
    pub fn new(ids: &mut IdAllocator, patient_dni: Dni, fields: NewAppointment) -> ClinicResult<Self> {
        Ok(Self {
            id: ids.next()?,
            created_at: Utc::now(),
            area: fields.area.into_inner(),
            medical_name: fields.medical_name.into_inner(),
            date: fields.date.into_inner(),
            time: fields.time.into_inner(),
            is_urgent: fields.is_urgent,
            patient_dni,
        })
    }

    pub fn apply(&mut self, patch: AppointmentPatch) {
        if let Some(area) = patch.area {
            self.area = area.into_inner();
        }
        if let Some(medical_name) = patch.medical_name {
            self.medical_name = medical_name.into_inner();
        }
        if let Some(date) = patch.date {
            self.date = date.into_inner();
        }
        if let Some(time) = patch.time {
            self.time = time.into_inner();
        }
        if let Some(is_urgent) = patch.is_urgent {
            self.is_urgent = is_urgent;
        }
    }

    pub(crate) fn patient_dni_str(&self) -> Option<&str> {
        Some(self.patient_dni.as_str())
    }

    pub(crate) fn area_str(&self) -> Option<&str> {
        Some(&self.area)
    }

    pub(crate) fn medical_name_str(&self) -> Option<&str> {
        Some(&self.medical_name)
    }
}

impl Entity for Appointment {
    const NAME: &'static str = "appointment";

    fn id(&self) -> u32 {
        self.id
    }
}
