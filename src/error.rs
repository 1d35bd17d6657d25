use thiserror::Error;

use crate::diagnostic::{Diagnostic, Diagnostics};

/// Unified error type for csemver-build operations
#[derive(Error, Debug)]
pub enum CsemverError {
    #[error("Invalid version input: {0}")]
    Invalid(Diagnostics),

    #[error("Version overflow: {0}")]
    Overflow(Diagnostic),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("SemVer error: {0}")]
    Semver(#[from] semver::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results in csemver-build
pub type Result<T> = std::result::Result<T, CsemverError>;

impl CsemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CsemverError::Config(msg.into())
    }

    /// Create an internal error; these indicate a defect, not bad input
    pub fn internal(msg: impl Into<String>) -> Self {
        CsemverError::Internal(msg.into())
    }

    /// The coded diagnostics carried by this error.
    ///
    /// Empty for failures that have no CSM code (configuration, I/O, defects).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            CsemverError::Invalid(diags) => &diags.0,
            CsemverError::Overflow(diag) => std::slice::from_ref(diag),
            _ => &[],
        }
    }

    pub fn is_coded(&self) -> bool {
        !self.diagnostics().is_empty()
    }
}
