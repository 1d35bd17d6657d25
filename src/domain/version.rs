use serde::{Deserialize, Serialize};
use std::fmt;

use super::prerelease::{PreRelease, PreReleaseName};

/// Raw, caller-supplied version fields.
///
/// Integers are signed and strings unchecked so that every out-of-range value
/// can be reported by the validator instead of being rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VersionInput {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
    pub pre_release_name: Option<String>,
    pub pre_release_number: i32,
    pub pre_release_fix: i32,
    pub ci_build_index: Option<String>,
    pub ci_build_name: Option<String>,
    pub build_meta: Option<String>,
}

/// Returns the value if it holds anything other than whitespace.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl VersionInput {
    /// Create a release version input
    pub fn new(major: i32, minor: i32, patch: i32) -> Self {
        VersionInput {
            major,
            minor,
            patch,
            ..Default::default()
        }
    }

    pub fn with_pre_release(mut self, name: impl Into<String>, number: i32, fix: i32) -> Self {
        self.pre_release_name = Some(name.into());
        self.pre_release_number = number;
        self.pre_release_fix = fix;
        self
    }

    pub fn with_ci_build(mut self, index: impl Into<String>, name: impl Into<String>) -> Self {
        self.ci_build_index = Some(index.into());
        self.ci_build_name = Some(name.into());
        self
    }

    pub fn with_build_meta(mut self, meta: impl Into<String>) -> Self {
        self.build_meta = Some(meta.into());
        self
    }

    /// A CI build has both a build index and a build name.
    pub fn is_ci_build(&self) -> bool {
        non_blank(&self.ci_build_index).is_some() && non_blank(&self.ci_build_name).is_some()
    }

    /// The recognized pre-release name, if one is set.
    pub fn pre_release(&self) -> Option<PreReleaseName> {
        non_blank(&self.pre_release_name).and_then(PreReleaseName::lookup)
    }

    /// Dense pre-release index, or -1 when not a (recognized) pre-release.
    pub fn pre_release_index(&self) -> i32 {
        self.pre_release()
            .map(|name| i32::from(name.index()))
            .unwrap_or(-1)
    }

    /// The CI identifiers, when this is a CI build.
    pub fn ci_build(&self) -> Option<CiBuild> {
        match (non_blank(&self.ci_build_index), non_blank(&self.ci_build_name)) {
            (Some(index), Some(name)) => Some(CiBuild::new(index, name)),
            _ => None,
        }
    }

    pub fn meta(&self) -> Option<&str> {
        non_blank(&self.build_meta)
    }
}

/// Build index and build name of a CI build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CiBuild {
    pub index: String,
    pub name: String,
}

impl CiBuild {
    pub fn new(index: impl Into<String>, name: impl Into<String>) -> Self {
        CiBuild {
            index: index.into(),
            name: name.into(),
        }
    }
}

/// Validated, in-range version components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VersionComponents {
    /// 0..=99999
    pub major: u32,
    /// 0..=49999
    pub minor: u32,
    /// 0..=9999
    pub patch: u32,
    pub pre_release: Option<PreRelease>,
}

impl VersionComponents {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        VersionComponents {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    pub fn with_pre_release(mut self, pre_release: PreRelease) -> Self {
        self.pre_release = Some(pre_release);
        self
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Same pre-release segment on a different release triple.
    pub fn with_release_triple(self, (major, minor, patch): (u32, u32, u32)) -> Self {
        VersionComponents {
            major,
            minor,
            patch,
            pre_release: self.pre_release,
        }
    }
}

impl fmt::Display for VersionComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = self.pre_release {
            write!(f, "-{}.{}.{}", pre.name, pre.number, pre.fix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_release() {
        let input = VersionInput::new(1, 2, 3);
        assert_eq!(input.pre_release_index(), -1);
        assert!(!input.is_ci_build());
        assert_eq!(input.meta(), None);
    }

    #[test]
    fn test_pre_release_index_uses_table() {
        let input = VersionInput::new(1, 2, 3).with_pre_release("delta", 0, 0);
        assert_eq!(input.pre_release_index(), 2);

        let input = VersionInput::new(1, 2, 3).with_pre_release("PreRelease", 0, 0);
        assert_eq!(input.pre_release_index(), 6);
    }

    #[test]
    fn test_unknown_pre_release_index_is_negative() {
        let input = VersionInput::new(1, 2, 3).with_pre_release("invalid", 0, 0);
        assert_eq!(input.pre_release_index(), -1);
    }

    #[test]
    fn test_blank_strings_are_absent() {
        let input = VersionInput::new(1, 2, 3)
            .with_pre_release("   ", 0, 0)
            .with_ci_build("", "ZZZ")
            .with_build_meta(" ");
        assert_eq!(input.pre_release(), None);
        assert!(!input.is_ci_build());
        assert_eq!(input.ci_build(), None);
        assert_eq!(input.meta(), None);
    }

    #[test]
    fn test_ci_build_requires_both_fields() {
        let input = VersionInput::new(1, 2, 3).with_ci_build("ABC", "ZZZ");
        assert!(input.is_ci_build());
        assert_eq!(input.ci_build(), Some(CiBuild::new("ABC", "ZZZ")));

        let mut only_index = VersionInput::new(1, 2, 3);
        only_index.ci_build_index = Some("ABC".to_string());
        assert!(!only_index.is_ci_build());
    }

    #[test]
    fn test_components_display() {
        let v = VersionComponents::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");

        let v = v.with_pre_release(PreRelease::new(PreReleaseName::Beta, 4, 0));
        assert_eq!(v.to_string(), "1.2.3-beta.4.0");
    }

    #[test]
    fn test_with_release_triple_keeps_pre_release() {
        let pre = PreRelease::new(PreReleaseName::Alpha, 1, 2);
        let v = VersionComponents::new(1, 2, 3)
            .with_pre_release(pre)
            .with_release_triple((1, 2, 4));
        assert_eq!(v.patch, 4);
        assert_eq!(v.pre_release, Some(pre));
    }
}
