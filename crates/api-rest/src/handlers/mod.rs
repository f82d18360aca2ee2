//! HTTP handlers, one module per resource.

pub mod appointments;
pub mod health;
pub mod medical_records;
pub mod patients;
