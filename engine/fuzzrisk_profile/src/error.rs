use std::path::PathBuf;

use fuzzrisk_shape::ConfigurationError;
use thiserror::Error;

/// Errors raised while loading or building a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read profile '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize profile: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("profile '{profile}' is misconfigured: {source}")]
    Configuration {
        profile: String,
        #[source]
        source: ConfigurationError,
    },
}
