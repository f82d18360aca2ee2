//! # CliniCare Core
//!
//! Core business logic for the CliniCare clinic backend.
//!
//! This crate contains the in-memory domain model and the services that mutate it:
//! - Per-entity identifier allocation with resync after bulk loads ([`allocator`])
//! - Substring filtering with conjunctive criteria ([`filter`])
//! - Patient registry, medical record and appointment services ([`repositories`])
//! - Seed document loading ([`seed`])
//!
//! **No API concerns**: HTTP routing and status-code mapping belong in `api-rest`.

pub mod allocator;
pub mod clinic;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod storage;

pub use allocator::IdAllocator;
pub use clinic::Clinic;
pub use config::CoreConfig;
pub use error::{ClinicError, ClinicResult};
pub use storage::{Entity, EntityStore, InMemoryStore};

pub use clinicare_types::{Dni, NonEmptyText, TextError};
