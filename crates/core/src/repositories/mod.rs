//! Services owning the clinic's in-memory collections.
//!
//! Each record service keeps its collection and identifier counter behind one mutex. Patients
//! are looked up through [`patients::PatientDirectory`] and never owned by other records.

pub mod appointments;
pub mod medical_records;
pub mod patients;
pub mod records;
