//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into core services, so request
//! handling never reads process-wide environment variables.

use crate::{ClinicError, ClinicResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    seed_file: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Arguments
    ///
    /// * `seed_file` - Optional seed document loaded into the in-memory collections at startup
    ///
    /// # Returns
    ///
    /// A configuration ready to pass to [`Clinic::from_config`](crate::Clinic::from_config).
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidInput` if `seed_file` is given but is not a regular file.
    pub fn new(seed_file: Option<PathBuf>) -> ClinicResult<Self> {
        if let Some(path) = &seed_file {
            if !path.is_file() {
                return Err(ClinicError::InvalidInput(format!(
                    "seed file does not exist or is not a file: {}",
                    path.display()
                )));
            }
        }

        Ok(Self { seed_file })
    }

    /// Path of the document loaded into the in-memory collections at startup, if any.
    pub fn seed_file(&self) -> Option<&Path> {
        self.seed_file.as_deref()
    }
}

/// Parse the seed file setting from an optional string value.
///
/// # Arguments
///
/// * `value` - Raw value of `CLINICARE_SEED_FILE`, if set
///
/// # Returns
///
/// The trimmed path, or `None` when the value is missing, empty or whitespace-only (start with
/// empty collections).
pub fn seed_file_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
