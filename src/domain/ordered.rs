//! Ordered-version codec
//!
//! Maps version components onto a single integer so that comparing two
//! versions is a plain numeric comparison. Each (major, minor, patch) owns a
//! block of `MUL_PATCH` values: the 80,000 pre-release slots come first, the
//! release itself is the last value of the block.

use serde::Serialize;
use std::fmt;

use crate::diagnostic::{Diagnostic, DiagnosticCode};

use super::prerelease::{PreRelease, PreReleaseName};
use super::version::VersionComponents;

pub const MUL_NUM: u64 = 100;
pub const MUL_NAME: u64 = MUL_NUM * 100;
pub const MUL_PATCH: u64 = MUL_NAME * 8 + 1;
pub const MUL_MINOR: u64 = MUL_PATCH * 10_000;
pub const MUL_MAJOR: u64 = MUL_MINOR * 50_000;

/// Ordered value of v99999.49999.9999, the largest representable release.
///
/// No CI build can be based on it since a CI build is a pre-release of the
/// next patch, and there is no next patch.
pub const MAX_ORDERED_VERSION: u64 = 4_000_050_000_000_000_000;

/// Total-order integer encoding of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct OrderedVersion(u64);

impl OrderedVersion {
    /// Encode validated components.
    pub fn encode(components: &VersionComponents) -> Self {
        let mut value = u64::from(components.major) * MUL_MAJOR
            + u64::from(components.minor) * MUL_MINOR
            + (u64::from(components.patch) + 1) * MUL_PATCH;

        if let Some(pre) = components.pre_release {
            // drop the release bias, land in this patch's pre-release slots
            value -= MUL_PATCH - 1;
            value += u64::from(pre.name.index()) * MUL_NAME;
            value += u64::from(pre.number) * MUL_NUM;
            value += u64::from(pre.fix);
        }

        OrderedVersion(value)
    }

    /// Wrap a raw value, rejecting anything above [`MAX_ORDERED_VERSION`].
    pub fn from_value(value: u64) -> Option<Self> {
        (value <= MAX_ORDERED_VERSION).then_some(OrderedVersion(value))
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_release(self) -> bool {
        self.0 % MUL_PATCH == 0
    }

    /// Advance to the CI position: one patch unit past this version.
    ///
    /// Fails with CSM109 when the result is past the largest release.
    pub fn ci_successor(self) -> Result<Self, Diagnostic> {
        self.0
            .checked_add(MUL_PATCH)
            .and_then(Self::from_value)
            .ok_or_else(|| Diagnostic::new(DiagnosticCode::Csm109))
    }

    /// Recover (major, minor, patch); pre-release slots are ignored.
    pub fn release_triple(self) -> (u32, u32, u32) {
        let mut accumulator = self.0;
        if accumulator % MUL_PATCH == 0 {
            accumulator -= MUL_PATCH;
        }

        let major = accumulator / MUL_MAJOR;
        accumulator %= MUL_MAJOR;

        let minor = accumulator / MUL_MINOR;
        accumulator %= MUL_MINOR;

        let patch = accumulator / MUL_PATCH;

        // bounded by MAX_ORDERED_VERSION, all fit in u32
        (major as u32, minor as u32, patch as u32)
    }

    /// Full inverse of [`OrderedVersion::encode`].
    ///
    /// Returns `None` for values that no valid version encodes to (zero, or a
    /// release past v99999.49999.9999).
    pub fn decode(self) -> Option<VersionComponents> {
        let slot = self.0 % MUL_PATCH;
        if self.0 == 0 || self.0 > MAX_ORDERED_VERSION {
            return None;
        }

        let triple = self.release_triple();
        if slot == 0 {
            return Some(VersionComponents::new(triple.0, triple.1, triple.2));
        }

        let slot = slot - 1;
        let name = PreReleaseName::from_index((slot / MUL_NAME) as u8)?;
        let number = ((slot % MUL_NAME) / MUL_NUM) as u8;
        let fix = (slot % MUL_NUM) as u8;
        Some(
            VersionComponents::new(triple.0, triple.1, triple.2)
                .with_pre_release(PreRelease::new(name, number, fix)),
        )
    }
}

impl fmt::Display for OrderedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<OrderedVersion> for u64 {
    fn from(value: OrderedVersion) -> Self {
        value.0
    }
}
