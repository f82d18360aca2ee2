//! Request validation.
//!
//! Turns request DTOs into core input types. Only presence is checked: required fields must be
//! present and not blank, and optional text fields, when sent, must not be blank. Every problem
//! is collected so the client sees all invalid fields at once.

use crate::error::{ApiError, FieldError};
use api_shared::{
    CreateAppointmentReq, CreateMedicalRecordReq, CreatePatientReq, UpdateAppointmentReq,
    UpdateMedicalRecordReq,
};
use chrono::Utc;
use clinicare_core::models::{
    AppointmentPatch, MedicalRecordPatch, NewAppointment, NewMedicalRecord, NewPatient,
};
use clinicare_core::{Dni, NonEmptyText};

#[derive(Debug, Default)]
struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn required(&mut self, field: &'static str, value: Option<String>) -> Option<NonEmptyText> {
        match value {
            None => {
                self.push(field, "is required");
                None
            }
            Some(v) => self.optional(field, Some(v)),
        }
    }

    fn optional(&mut self, field: &'static str, value: Option<String>) -> Option<NonEmptyText> {
        match NonEmptyText::new(value?) {
            Ok(text) => Some(text),
            Err(e) => {
                self.push(field, e.to_string());
                None
            }
        }
    }

    fn dni(&mut self, field: &'static str, value: Option<String>) -> Option<Dni> {
        let Some(value) = value else {
            self.push(field, "is required");
            return None;
        };
        match Dni::new(value) {
            Ok(dni) => Some(dni),
            Err(e) => {
                self.push(field, e.to_string());
                None
            }
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors.0)
    }
}

/// Parses the `patientDni` query parameter naming a record's owner.
pub fn owner_dni(value: Option<String>) -> Result<Dni, ApiError> {
    let mut errors = FieldErrors::default();
    errors.dni("patientDni", value).ok_or_else(|| errors.into())
}

pub fn path_dni(value: String) -> Result<Dni, ApiError> {
    let mut errors = FieldErrors::default();
    errors.dni("dni", Some(value)).ok_or_else(|| errors.into())
}

pub fn new_medical_record(req: CreateMedicalRecordReq) -> Result<NewMedicalRecord, ApiError> {
    let mut errors = FieldErrors::default();
    let doctor_name = errors.required("doctorName", req.doctor_name);
    let treatment = errors.required("treatment", req.treatment);

    match (doctor_name, treatment) {
        (Some(doctor_name), Some(treatment)) if errors.is_empty() => Ok(NewMedicalRecord {
            date: req.created_at.unwrap_or_else(Utc::now),
            doctor_name,
            treatment,
            treatment_cost: req.treatment_cost,
            notes: req.notes,
        }),
        _ => Err(errors.into()),
    }
}

pub fn medical_record_patch(req: UpdateMedicalRecordReq) -> Result<MedicalRecordPatch, ApiError> {
    let mut errors = FieldErrors::default();
    let patch = MedicalRecordPatch {
        doctor_name: errors.optional("doctorName", req.doctor_name),
        treatment: errors.optional("treatment", req.treatment),
        treatment_cost: req.treatment_cost,
        notes: req.notes,
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors.into())
    }
}

pub fn new_appointment(req: CreateAppointmentReq) -> Result<NewAppointment, ApiError> {
    let mut errors = FieldErrors::default();
    let area = errors.required("area", req.area);
    let medical_name = errors.required("medicalName", req.medical_name);
    let date = errors.required("date", req.date);
    let time = errors.required("time", req.time);

    match (area, medical_name, date, time) {
        (Some(area), Some(medical_name), Some(date), Some(time)) if errors.is_empty() => {
            Ok(NewAppointment {
                area,
                medical_name,
                date,
                time,
                is_urgent: req.is_urgent.unwrap_or(false),
            })
        }
        _ => Err(errors.into()),
    }
}

pub fn appointment_patch(req: UpdateAppointmentReq) -> Result<AppointmentPatch, ApiError> {
    let mut errors = FieldErrors::default();
    let patch = AppointmentPatch {
        area: errors.optional("area", req.area),
        medical_name: errors.optional("medicalName", req.medical_name),
        date: errors.optional("date", req.date),
        time: errors.optional("time", req.time),
        is_urgent: req.is_urgent,
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors.into())
    }
}

pub fn new_patient(req: CreatePatientReq) -> Result<NewPatient, ApiError> {
    let mut errors = FieldErrors::default();
    let dni = errors.dni("dni", req.dni);
    let first_name = errors.required("firstName", req.first_name);
    let last_name = errors.required("lastName", req.last_name);

    match (dni, first_name, last_name) {
        (Some(dni), Some(first_name), Some(last_name)) if errors.is_empty() => Ok(NewPatient {
            dni,
            first_name,
            last_name,
            birth_date: req.birth_date,
            phone: req.phone,
        }),
        _ => Err(errors.into()),
    }
}
