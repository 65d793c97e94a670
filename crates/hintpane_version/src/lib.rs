//! Release version comparison for "check for updates".
//!
//! A [`Version`] is a strict `major.minor.patch` triple. [`is_newer`] decides
//! whether a candidate release postdates the running one and fails closed on
//! malformed input. [`UpdateStatus`] is the tri-state signal a UI displays, and
//! [`ReleaseManifest`] reads the remote document naming the latest release.

#![warn(missing_docs)]

pub mod compare;
pub mod manifest;
pub mod status;
pub mod version;

pub use compare::is_newer;
pub use manifest::{ManifestError, ReleaseManifest};
pub use status::UpdateStatus;
pub use version::{ParseVersionError, Version};
