//! User interface module - output selection and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Choosing and producing the requested output form

use crate::error::Result;
use crate::version::VersionInfo;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_diagnostics, display_error, format_diagnostic, format_properties, format_summary,
};

/// How a computed version is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Only the version string
    #[default]
    Version,
    /// Human readable summary
    Text,
    /// `Name=Value` build properties
    Props,
    /// TOML document
    Toml,
}

/// Render `info` in the requested format.
pub fn render_output(info: &VersionInfo, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Version => info.version.clone(),
        OutputFormat::Text => format_summary(info),
        OutputFormat::Props => format_properties(info),
        OutputFormat::Toml => toml::to_string(info)
            .map_err(|e| crate::error::CsemverError::internal(format!("TOML output: {}", e)))?,
    };
    Ok(rendered)
}
