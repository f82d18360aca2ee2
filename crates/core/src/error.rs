//! Error type for core clinic operations.

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
    #[error("{0}")]
    Unexpected(String),

    #[error("failed to read seed file: {0}")]
    SeedRead(std::io::Error),
    #[error("failed to parse seed file: {0}")]
    SeedParse(serde_json::Error),
    #[error("failed to parse YAML seed file: {0}")]
    SeedParseYaml(serde_yaml::Error),
}

impl ClinicError {
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        ClinicError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Returns true for the `NotFound` kind, regardless of entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClinicError::NotFound { .. })
    }
}

impl From<clinicare_types::TextError> for ClinicError {
    fn from(e: clinicare_types::TextError) -> Self {
        ClinicError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::Unexpected(format!("lock poisoned: {}", e))
    }
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
