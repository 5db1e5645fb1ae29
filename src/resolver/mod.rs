//! Package resolution: maps a detected platform to what the landing page shows.

use log::debug;

use crate::metadata::{MetadataTable, PackageEntry};
use crate::platform::{CanonicalPlatform, Cpu, Os};

/// Label shown wherever no single value applies.
pub const PLACEHOLDER: &str = "N/A";

/// Everything the presentation layer needs to render the download area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationDecision {
    pub os: Os,
    pub platform_label: String,
    pub package_label: String,
    pub version_label: String,
    pub download_url: Option<String>,
    pub show_dual_mac_buttons: bool,
}

impl PresentationDecision {
    fn for_entry(os: Os, platform_label: &str, entry: Option<&PackageEntry>) -> Self {
        match entry {
            Some(entry) => Self {
                os,
                platform_label: platform_label.to_string(),
                package_label: label_or_placeholder(&entry.package_id),
                version_label: label_or_placeholder(&entry.version),
                download_url: Some(entry.download_url.trim().to_string())
                    .filter(|url| !url.is_empty()),
                show_dual_mac_buttons: false,
            },
            None => Self::placeholder(os, platform_label),
        }
    }

    fn placeholder(os: Os, platform_label: &str) -> Self {
        Self {
            os,
            platform_label: platform_label.to_string(),
            package_label: PLACEHOLDER.to_string(),
            version_label: PLACEHOLDER.to_string(),
            download_url: None,
            show_dual_mac_buttons: false,
        }
    }
}

fn label_or_placeholder(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

/// Resolve the decision for a platform. Pure and total: missing table entries
/// degrade to placeholder labels.
///
/// OS dispatch comes first; the CPU only matters for macOS.
pub fn resolve(platform: &CanonicalPlatform, table: &MetadataTable) -> PresentationDecision {
    let decision = match (platform.os, platform.cpu) {
        (Os::Windows, _) => {
            PresentationDecision::for_entry(Os::Windows, "Windows", table.windows.as_ref())
        }
        (Os::MacOs, Cpu::Amd64) => PresentationDecision::for_entry(
            Os::MacOs,
            "macOS (Intel)",
            table.mac_os.intel.as_ref(),
        ),
        (Os::MacOs, Cpu::Arm64) => PresentationDecision::for_entry(
            Os::MacOs,
            "macOS (Apple Silicon)",
            table.mac_os.apple_silicon.as_ref(),
        ),
        (Os::MacOs, Cpu::Unknown) => PresentationDecision {
            show_dual_mac_buttons: true,
            ..PresentationDecision::placeholder(Os::MacOs, "macOS")
        },
        (Os::Ios, _) => PresentationDecision::for_entry(Os::Ios, "iOS", table.ios.as_ref()),
        (Os::Android, _) => {
            PresentationDecision::for_entry(Os::Android, "Android", table.android.as_ref())
        }
        (Os::Unknown, _) => PresentationDecision::placeholder(Os::Unknown, PLACEHOLDER),
    };

    debug!("Resolved {} to {:?}", platform, decision);
    decision
}
