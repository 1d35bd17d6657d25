//! Pre-release names recognized by CSemVer
//!
//! The name set is fixed and ordered; a name's position in the table is part of
//! the ordered-version encoding, so the table must never be reordered.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Historical spelling accepted as input for [`PreReleaseName::Pre`].
const PRERELEASE_ALIAS: &str = "prerelease";

/// One of the eight recognized pre-release names, in ordering sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseName {
    Alpha,
    Beta,
    Delta,
    Epsilon,
    Gamma,
    Kappa,
    Pre,
    ReleaseCandidate,
}

impl PreReleaseName {
    /// All names, indexed by their dense pre-release index.
    pub const ALL: [PreReleaseName; 8] = [
        PreReleaseName::Alpha,
        PreReleaseName::Beta,
        PreReleaseName::Delta,
        PreReleaseName::Epsilon,
        PreReleaseName::Gamma,
        PreReleaseName::Kappa,
        PreReleaseName::Pre,
        PreReleaseName::ReleaseCandidate,
    ];

    /// Dense index 0..=7 within the name table.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Canonical spelling, as rendered in version strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            PreReleaseName::Alpha => "alpha",
            PreReleaseName::Beta => "beta",
            PreReleaseName::Delta => "delta",
            PreReleaseName::Epsilon => "epsilon",
            PreReleaseName::Gamma => "gamma",
            PreReleaseName::Kappa => "kappa",
            PreReleaseName::Pre => "pre",
            PreReleaseName::ReleaseCandidate => "rc",
        }
    }

    /// Case-insensitive lookup, accepting the "prerelease" alias.
    ///
    /// The whole string must match; surrounding whitespace is not stripped.
    pub fn lookup(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case(PRERELEASE_ALIAS) {
            return Some(PreReleaseName::Pre);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(name))
    }
}

/// Returned when a string is not one of the recognized names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreReleaseName(pub String);

impl fmt::Display for UnknownPreReleaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown pre-release name: '{}'", self.0)
    }
}

impl std::error::Error for UnknownPreReleaseName {}

impl FromStr for PreReleaseName {
    type Err = UnknownPreReleaseName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownPreReleaseName(s.to_string()))
    }
}

impl Serialize for PreReleaseName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for PreReleaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated pre-release segment of a version: name, number and fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PreRelease {
    pub name: PreReleaseName,
    /// 0..=99
    pub number: u8,
    /// 0..=99
    pub fix: u8,
}

impl PreRelease {
    pub fn new(name: PreReleaseName, number: u8, fix: u8) -> Self {
        PreRelease { name, number, fix }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order_matches_table() {
        let names: Vec<&str> = PreReleaseName::ALL.iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["alpha", "beta", "delta", "epsilon", "gamma", "kappa", "pre", "rc"]
        );
        for (i, name) in PreReleaseName::ALL.iter().enumerate() {
            assert_eq!(usize::from(name.index()), i);
            assert_eq!(PreReleaseName::from_index(i as u8), Some(*name));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(PreReleaseName::from_index(8), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(PreReleaseName::lookup("ALPHA"), Some(PreReleaseName::Alpha));
        assert_eq!(PreReleaseName::lookup("Rc"), Some(PreReleaseName::ReleaseCandidate));
        assert_eq!(PreReleaseName::lookup("kappa"), Some(PreReleaseName::Kappa));
    }

    #[test]
    fn test_prerelease_alias_maps_to_pre() {
        assert_eq!(PreReleaseName::lookup("prerelease"), Some(PreReleaseName::Pre));
        assert_eq!(PreReleaseName::lookup("PreRelease"), Some(PreReleaseName::Pre));
        assert_eq!(PreReleaseName::lookup("pre"), Some(PreReleaseName::Pre));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(PreReleaseName::lookup("invalid"), None);
        assert_eq!(PreReleaseName::lookup("a"), None);
        assert_eq!(PreReleaseName::lookup(""), None);
        assert_eq!(PreReleaseName::lookup(" alpha "), None);
        assert_eq!(PreReleaseName::lookup("rc\n"), None);
        assert!("release".parse::<PreReleaseName>().is_err());
    }

    #[test]
    fn test_display_uses_table_spelling() {
        let parsed: PreReleaseName = "BETA".parse().unwrap();
        assert_eq!(parsed.to_string(), "beta");
        assert_eq!(PreReleaseName::ReleaseCandidate.to_string(), "rc");
    }

    #[test]
    fn test_names_order_like_their_index() {
        assert!(PreReleaseName::Alpha < PreReleaseName::Beta);
        assert!(PreReleaseName::Pre < PreReleaseName::ReleaseCandidate);
    }
}
