//! Installer metadata: the static document listing one package per platform.

mod error;
mod source;

use serde::Deserialize;

pub use error::MetadataFetchError;
pub use source::{MetadataSource, load};

/// One downloadable installer package.
///
/// Missing fields load as empty strings and show up as placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageEntry {
    #[serde(rename = "package", default)]
    pub package_id: String,
    #[serde(rename = "link", default)]
    pub download_url: String,
    #[serde(default)]
    pub version: String,
}

/// macOS packages, split by CPU variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MacOsPackages {
    #[serde(rename = "Intel", default)]
    pub intel: Option<PackageEntry>,
    #[serde(rename = "AppleSilicon", default)]
    pub apple_silicon: Option<PackageEntry>,
}

/// The metadata table, immutable once loaded.
///
/// Every entry is optional so a document missing a platform still loads;
/// the resolver degrades missing entries to placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MetadataTable {
    #[serde(rename = "Windows", default)]
    pub windows: Option<PackageEntry>,
    #[serde(rename = "macOS", default)]
    pub mac_os: MacOsPackages,
    #[serde(rename = "iOS", default)]
    pub ios: Option<PackageEntry>,
    #[serde(rename = "Android", default)]
    pub android: Option<PackageEntry>,
}

impl MetadataTable {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
