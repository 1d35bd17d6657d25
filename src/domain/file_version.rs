//! Four-part 16-bit file version derived from an ordered version.
//!
//! The ordered value is doubled and tagged with a CI bit, then split into
//! base-65536 digits. CI builds are post-release numbers, so their file
//! versions are always odd.

use serde::Serialize;
use std::fmt;

use super::ordered::OrderedVersion;

const DIGIT: u64 = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FileVersionQuad {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl FileVersionQuad {
    pub fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        FileVersionQuad {
            major,
            minor,
            build,
            revision,
        }
    }

    pub fn encode(ordered: OrderedVersion, is_ci_build: bool) -> Self {
        let tagged = (ordered.value() << 1) + u64::from(is_ci_build);
        Self::from_u64(tagged)
    }

    fn from_u64(tagged: u64) -> Self {
        FileVersionQuad {
            revision: (tagged % DIGIT) as u16,
            build: ((tagged / DIGIT) % DIGIT) as u16,
            minor: ((tagged / DIGIT.pow(2)) % DIGIT) as u16,
            major: ((tagged / DIGIT.pow(3)) % DIGIT) as u16,
        }
    }

    /// The doubled-and-tagged value the four digits spell out.
    pub fn to_u64(&self) -> u64 {
        (u64::from(self.major) << 48)
            | (u64::from(self.minor) << 32)
            | (u64::from(self.build) << 16)
            | u64::from(self.revision)
    }

    /// Recover the ordered version and CI flag.
    ///
    /// Returns `None` when the quad holds a value beyond the largest valid
    /// ordered version.
    pub fn decode(&self) -> Option<(OrderedVersion, bool)> {
        let tagged = self.to_u64();
        OrderedVersion::from_value(tagged >> 1).map(|ordered| (ordered, tagged & 1 == 1))
    }

    pub fn is_ci_build(&self) -> bool {
        self.revision & 1 == 1
    }
}

impl fmt::Display for FileVersionQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}
