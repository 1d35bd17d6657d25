use serde::Serialize;
use std::fmt;

use crate::domain::{FileVersionQuad, OrderedVersion, VersionComponents, VersionInput};
use crate::error::{CsemverError, Result};
use crate::format::{render_version, RenderOptions};
use crate::validate::{validate, validated_components, ValidationOptions};

/// Options for a single version computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeOptions {
    pub validation: ValidationOptions,
    /// Append `+BuildMeta` to the version string when metadata is present.
    pub include_metadata: bool,
}

impl Default for ComputeOptions {
    fn default() -> Self {
        ComputeOptions {
            validation: ValidationOptions::default(),
            include_metadata: true,
        }
    }
}

/// Both canonical representations of one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Rendered CSemVer or CSemVer-CI string
    pub version: String,
    /// Ordered value of the base version the file version is derived from
    pub ordered_version: OrderedVersion,
    pub is_ci_build: bool,
    pub file_version: FileVersionQuad,
    /// Components as rendered; for CI builds this is the advanced version
    pub components: VersionComponents,
}

impl VersionInfo {
    /// Parse the rendered string with the `semver` crate.
    ///
    /// Fails for strings strict SemVer rejects, e.g. an all-digit CI index
    /// with a leading zero.
    pub fn to_semver(&self) -> Result<semver::Version> {
        Ok(semver::Version::parse(&self.version)?)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

/// Compute the version string and file version with default options.
pub fn compute(input: &VersionInput) -> Result<VersionInfo> {
    compute_with(input, &ComputeOptions::default())
}

/// Validate `input`, then derive its ordered value, file version and string.
///
/// # Returns
/// * `Ok(VersionInfo)` - Both outputs
/// * `Err(CsemverError::Invalid)` - Every input violation (CSM100-CSM108)
/// * `Err(CsemverError::Overflow)` - CSM109, no CI version exists past the base
pub fn compute_with(input: &VersionInput, options: &ComputeOptions) -> Result<VersionInfo> {
    tracing::debug!(
        major = input.major,
        minor = input.minor,
        patch = input.patch,
        pre_release_name = input.pre_release_name.as_deref().unwrap_or_default(),
        pre_release_number = input.pre_release_number,
        pre_release_fix = input.pre_release_fix,
        ci_build_index = input.ci_build_index.as_deref().unwrap_or_default(),
        ci_build_name = input.ci_build_name.as_deref().unwrap_or_default(),
        build_meta = input.build_meta.as_deref().unwrap_or_default(),
        "computing version"
    );

    let violations = validate(input, &options.validation);
    if !violations.is_empty() {
        return Err(CsemverError::Invalid(violations.into()));
    }

    let base = validated_components(input)?;
    tracing::debug!(pre_release_index = input.pre_release_index(), "resolved pre-release");

    let ci = input.ci_build();
    let is_ci_build = ci.is_some();

    let ordered = OrderedVersion::encode(&base);
    let file_version = FileVersionQuad::encode(ordered, is_ci_build);
    tracing::debug!(%ordered, %file_version, is_ci_build, "encoded ordered version");

    let components = if is_ci_build {
        let advanced = ordered.ci_successor().map_err(CsemverError::Overflow)?;
        base.with_release_triple(advanced.release_triple())
    } else {
        base
    };

    let version = render_version(
        &components,
        ci.as_ref(),
        input.meta(),
        RenderOptions {
            always_include_zero: is_ci_build,
            include_metadata: options.include_metadata,
        },
    );
    tracing::debug!(version = %version, "rendered version");

    Ok(VersionInfo {
        version,
        ordered_version: ordered,
        is_ci_build,
        file_version,
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticCode;

    #[test]
    fn test_ci_alpha() {
        let input = VersionInput::new(20, 1, 4)
            .with_pre_release("alpha", 0, 0)
            .with_ci_build("ABC", "ZZZ");
        let info = compute(&input).unwrap();
        assert_eq!(info.version, "20.1.5-alpha.0.0.ci.ABC.ZZZ");
        assert_eq!(info.file_version, FileVersionQuad::new(5, 44854, 3875, 59947));
        assert!(info.is_ci_build);
    }

    #[test]
    fn test_ci_release() {
        let input = VersionInput::new(20, 1, 5).with_ci_build("ABCDEF12", "ZZZ");
        let info = compute(&input).unwrap();
        assert_eq!(info.version, "20.1.6--ci.ABCDEF12.ZZZ");
        assert_eq!(info.file_version.revision, 52269);
        assert_eq!(info.file_version.to_string(), "5.44854.3880.52269");
        assert_eq!(info.components, VersionComponents::new(20, 1, 6));
    }

    #[test]
    fn test_release_pre_release_fix_suppressed() {
        let input = VersionInput::new(1, 2, 3).with_pre_release("alpha", 1, 0);
        let info = compute(&input).unwrap();
        assert_eq!(info.version, "1.2.3-alpha.1");
        assert!(!info.is_ci_build);
        assert_eq!(info.file_version.revision & 1, 0);
    }

    #[test]
    fn test_plain_release() {
        let info = compute(&VersionInput::new(20, 1, 4)).unwrap();
        assert_eq!(info.version, "20.1.4");
        assert_eq!(info.to_string(), "20.1.4");
        assert_eq!(info.file_version, FileVersionQuad::new(5, 44854, 3878, 23338));
    }

    #[test]
    fn test_overflow() {
        let input = VersionInput::new(99_999, 49_999, 9_999).with_ci_build("ABC", "ZZZ");
        let err = compute(&input).unwrap_err();
        assert!(matches!(err, CsemverError::Overflow(_)));
        let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![DiagnosticCode::Csm109]);
    }

    #[test]
    fn test_max_release_without_ci_is_fine() {
        let info = compute(&VersionInput::new(99_999, 49_999, 9_999)).unwrap();
        assert_eq!(info.version, "99999.49999.9999");
    }

    #[test]
    fn test_negative_major() {
        let err = compute(&VersionInput::new(-1, 0, 0)).unwrap_err();
        let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![DiagnosticCode::Csm100]);
    }

    #[test]
    fn test_metadata_toggle() {
        let input = VersionInput::new(1, 0, 0).with_build_meta("sha.abc");
        assert_eq!(compute(&input).unwrap().version, "1.0.0+sha.abc");

        let options = ComputeOptions {
            include_metadata: false,
            ..ComputeOptions::default()
        };
        assert_eq!(compute_with(&input, &options).unwrap().version, "1.0.0");
    }

    #[test]
    fn test_prerelease_alias_renders_as_pre() {
        let input = VersionInput::new(2, 0, 0).with_pre_release("PreRelease", 3, 0);
        assert_eq!(compute(&input).unwrap().version, "2.0.0-pre.3");
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = VersionInput::new(20, 1, 5).with_ci_build("ABC", "ZZZ");
        let before = input.clone();
        let _ = compute(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_to_semver() {
        let info = compute(&VersionInput::new(1, 2, 3).with_pre_release("beta", 1, 2)).unwrap();
        let parsed = info.to_semver().unwrap();
        assert_eq!(parsed.major, 1);
        assert_eq!(parsed.pre.as_str(), "beta.1.2");
    }

    #[test]
    fn test_to_semver_rejects_leading_zero_index() {
        let input = VersionInput::new(1, 2, 3).with_ci_build("0123", "local");
        let info = compute(&input).unwrap();
        assert!(matches!(info.to_semver(), Err(CsemverError::Semver(_))));
    }
}
