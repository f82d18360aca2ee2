//! Constants used throughout the CliniCare core crate.

/// Default REST listen address when `CLINICARE_REST_ADDR` is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Environment variable holding the REST listen address.
pub const REST_ADDR_ENV: &str = "CLINICARE_REST_ADDR";

/// Environment variable holding the optional seed document path.
pub const SEED_FILE_ENV: &str = "CLINICARE_SEED_FILE";

/// File extensions parsed as YAML seed documents. Everything else is read as JSON.
pub const YAML_SEED_EXTENSIONS: [&str; 2] = ["yaml", "yml"];
