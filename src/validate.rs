//! Input validation for version components.
//!
//! Every rule is checked on every call; the caller receives all violations at
//! once rather than only the first.

use regex::Regex;
use std::sync::OnceLock;

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::domain::version::non_blank;
use crate::domain::{PreRelease, VersionComponents, VersionInput};
use crate::error::{CsemverError, Result};

pub const MAX_MAJOR: i32 = 99_999;
pub const MAX_MINOR: i32 = 49_999;
pub const MAX_PATCH: i32 = 9_999;
pub const MAX_PRE_RELEASE_NUMBER: i32 = 99;
pub const MAX_PRE_RELEASE_FIX: i32 = 99;

const CI_TOKEN_PATTERN: &str = r"^[0-9A-Za-z-]+$";

/// Knobs that change which inputs are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Range-check the pre-release fix even when the pre-release number is 0.
    ///
    /// Off by default: historically a fix with a zero number was never
    /// checked, it is clamped into range instead.
    pub strict_fix_range: bool,
}

fn ci_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CI_TOKEN_PATTERN).expect("CI token pattern is valid"))
}

/// Whether a CI build index or name matches `[0-9A-Za-z-]+`.
pub fn is_ci_token(value: &str) -> bool {
    ci_token_regex().is_match(value)
}

fn in_range(value: i32, max: i32) -> bool {
    (0..=max).contains(&value)
}

/// Check every field of `input` and return all violations found.
///
/// An empty result means the input can be computed.
pub fn validate(input: &VersionInput, options: &ValidationOptions) -> Vec<Diagnostic> {
    let mut violations = Vec::new();
    let mut report = |code: DiagnosticCode| violations.push(Diagnostic::new(code));

    if !in_range(input.major, MAX_MAJOR) {
        report(DiagnosticCode::Csm100);
    }

    if !in_range(input.minor, MAX_MINOR) {
        report(DiagnosticCode::Csm101);
    }

    if !in_range(input.patch, MAX_PATCH) {
        report(DiagnosticCode::Csm102);
    }

    // number and fix mean nothing without a name
    if non_blank(&input.pre_release_name).is_some() {
        if input.pre_release().is_none() {
            report(DiagnosticCode::Csm103);
        }

        if !in_range(input.pre_release_number, MAX_PRE_RELEASE_NUMBER) {
            report(DiagnosticCode::Csm104);
        }

        let check_fix = input.pre_release_number != 0 || options.strict_fix_range;
        if check_fix && !in_range(input.pre_release_fix, MAX_PRE_RELEASE_FIX) {
            report(DiagnosticCode::Csm105);
        }
    }

    // blank counts as unset for pairing, but a set value must still be a token
    let index_set = non_blank(&input.ci_build_index).is_some();
    let name_set = non_blank(&input.ci_build_name).is_some();
    if index_set != name_set {
        report(DiagnosticCode::Csm106);
    }

    if input.ci_build_index.as_deref().is_some_and(|index| !is_ci_token(index)) {
        report(DiagnosticCode::Csm107);
    }

    if input.ci_build_name.as_deref().is_some_and(|name| !is_ci_token(name)) {
        report(DiagnosticCode::Csm108);
    }

    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "input validation failed");
    }

    violations
}

/// Convert input that passed [`validate`] into unsigned components.
///
/// A fix outside 0..=99 can only get here when the number is 0 and the check
/// was not strict; it is clamped so the ordered value stays inside its slot.
pub fn validated_components(input: &VersionInput) -> Result<VersionComponents> {
    let unsigned = |value: i32, field: &str| {
        u32::try_from(value)
            .map_err(|_| CsemverError::internal(format!("{} {} escaped validation", field, value)))
    };

    let mut components = VersionComponents::new(
        unsigned(input.major, "major")?,
        unsigned(input.minor, "minor")?,
        unsigned(input.patch, "patch")?,
    );

    if let Some(name) = input.pre_release() {
        let number = u8::try_from(input.pre_release_number).map_err(|_| {
            CsemverError::internal(format!(
                "pre-release number {} escaped validation",
                input.pre_release_number
            ))
        })?;

        let clamped = input.pre_release_fix.clamp(0, MAX_PRE_RELEASE_FIX);
        if clamped != input.pre_release_fix {
            tracing::warn!(
                fix = input.pre_release_fix,
                clamped,
                "pre-release fix out of range with a zero pre-release number; clamping"
            );
        }

        components = components.with_pre_release(PreRelease::new(name, number, clamped as u8));
    }

    Ok(components)
}
