pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod domain;
pub mod error;
pub mod format;
pub mod ui;
pub mod validate;
pub mod version;

pub use diagnostic::{Diagnostic, DiagnosticCode, Diagnostics};
pub use domain::{FileVersionQuad, OrderedVersion, VersionInput};
pub use error::{CsemverError, Result};
pub use version::{compute, compute_with, ComputeOptions, VersionInfo};
