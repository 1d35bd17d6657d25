//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from the
//! computation. Functions returning `String` are pure and testable; `display_*`
//! functions only print.

use console::style;

use crate::diagnostic::Diagnostic;
use crate::version::VersionInfo;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// One line per diagnostic, `error CSM100: <message>`.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!("error {}: {}", diagnostic.code, diagnostic.message)
}

/// Print every diagnostic to stderr, one [`format_diagnostic`] line each.
pub fn display_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", style(format_diagnostic(diagnostic)).red());
    }
}

/// Build-property style output, one `Name=Value` per line.
pub fn format_properties(info: &VersionInfo) -> String {
    let quad = &info.file_version;
    let lines = [
        format!("CSemVer={}", info.version),
        format!("FileVersion={}", quad),
        format!("FileVersionMajor={}", quad.major),
        format!("FileVersionMinor={}", quad.minor),
        format!("FileVersionBuild={}", quad.build),
        format!("FileVersionRevision={}", quad.revision),
        format!("IsCiBuild={}", info.is_ci_build),
    ];
    lines.join("\n")
}

/// Human readable summary.
pub fn format_summary(info: &VersionInfo) -> String {
    let kind = if info.is_ci_build { "CI build" } else { "release build" };
    format!(
        "Version:      {}\nFile version: {}\nOrdered:      {}\nKind:         {}",
        info.version, info.file_version, info.ordered_version, kind
    )
}
