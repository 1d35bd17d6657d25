//! Rendering of CSemVer and CSemVer-CI version strings.
//!
//! Grammar: `Major.Minor.Patch[-Name[.Number[.Fix]]][{.|--}ci.Index.Name][+Meta]`

use std::fmt;

use crate::domain::{CiBuild, VersionComponents};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show pre-release number and fix even when zero. Set for CI builds so
    /// their pre-release ordering stays monotonic.
    pub always_include_zero: bool,
    pub include_metadata: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            always_include_zero: false,
            include_metadata: true,
        }
    }
}

/// Render the canonical version string.
///
/// `components` must already carry the CI-advanced release triple when `ci`
/// is set.
pub fn render_version(
    components: &VersionComponents,
    ci: Option<&CiBuild>,
    meta: Option<&str>,
    options: RenderOptions,
) -> String {
    RenderedVersion {
        components,
        ci,
        meta: meta.filter(|_| options.include_metadata),
        always_include_zero: options.always_include_zero,
    }
    .to_string()
}

struct RenderedVersion<'a> {
    components: &'a VersionComponents,
    ci: Option<&'a CiBuild>,
    meta: Option<&'a str>,
    always_include_zero: bool,
}

impl fmt::Display for RenderedVersion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.components;
        write!(f, "{}.{}.{}", c.major, c.minor, c.patch)?;

        if let Some(pre) = c.pre_release {
            write!(f, "-{}", pre.name)?;

            if self.always_include_zero || pre.number > 0 || pre.fix > 0 {
                write!(f, ".{}", pre.number)?;

                if self.always_include_zero || pre.fix > 0 {
                    write!(f, ".{}", pre.fix)?;
                }
            }
        }

        if let Some(ci) = self.ci {
            // double dash marks a CI build with no pre-release
            let separator = if c.is_pre_release() { "." } else { "--" };
            write!(f, "{}ci.{}.{}", separator, ci.index, ci.name)?;
        }

        if let Some(meta) = self.meta {
            write!(f, "+{}", meta)?;
        }

        Ok(())
    }
}
