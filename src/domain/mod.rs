//! Domain logic - pure version arithmetic independent of any build host

pub mod build_index;
pub mod file_version;
pub mod ordered;
pub mod prerelease;
pub mod version;

pub use build_index::{build_index_from_rfc3339, build_index_from_timestamp};
pub use file_version::FileVersionQuad;
pub use ordered::{OrderedVersion, MAX_ORDERED_VERSION};
pub use prerelease::{PreRelease, PreReleaseName};
pub use version::{CiBuild, VersionComponents, VersionInput};
