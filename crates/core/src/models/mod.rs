//! Domain entities held by the record services.

pub mod appointment;
pub mod medical_record;
pub mod patient;

pub use appointment::{Appointment, AppointmentPatch, NewAppointment};
pub use medical_record::{MedicalRecord, MedicalRecordPatch, NewMedicalRecord};
pub use patient::{NewPatient, Patient};
