use serde::Serialize;

use super::Notice;
use crate::metadata::{MetadataTable, PackageEntry};
use crate::platform::Os;
use crate::resolver::PresentationDecision;

/// The three text fields of the download area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFields {
    pub platform: String,
    pub package: String,
    pub version: String,
}

/// QR-code panel shown to mobile visitors instead of a direct download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrPanel {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub target_url: Option<String>,
}

impl QrPanel {
    /// Panel for the given OS, or `None` for platforms that download directly.
    pub fn for_os(os: Os, target_url: Option<String>) -> Option<Self> {
        if !os.is_mobile() {
            return None;
        }

        let (title, subtitle, image) = if os == Os::Ios {
            (
                "Get the app for iOS",
                "Scan with your iPhone or iPad camera to open the App Store",
                "images/qr-ios.png",
            )
        } else {
            (
                "Get the app for Android",
                "Scan with your Android phone to open Google Play",
                "images/qr-android.png",
            )
        };

        Some(Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image: image.to_string(),
            target_url,
        })
    }
}

/// What activating a button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    Navigate(String),
    Unavailable(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    pub url: Option<String>,
}

impl Button {
    pub fn new(label: impl Into<String>, url: Option<String>) -> Self {
        Self {
            label: label.into(),
            url,
        }
    }

    pub fn activate(&self) -> ButtonAction {
        match &self.url {
            Some(url) => ButtonAction::Navigate(url.clone()),
            None => ButtonAction::Unavailable(Notice::download_unavailable()),
        }
    }
}

/// Either the single default button or the two macOS variant buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ButtonLayout {
    Single { button: Button },
    DualMac { intel: Button, apple_silicon: Button },
}

/// Which button the visitor clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ButtonChoice {
    Default,
    Intel,
    AppleSilicon,
}

/// Everything the page renders after detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub text: TextFields,
    pub qr_panel: Option<QrPanel>,
    pub buttons: ButtonLayout,
}

impl PageLayout {
    /// The table is only consulted for the dual macOS buttons, which need
    /// both variant URLs.
    pub fn build(decision: &PresentationDecision, table: &MetadataTable) -> Self {
        let text = TextFields {
            platform: decision.platform_label.clone(),
            package: decision.package_label.clone(),
            version: decision.version_label.clone(),
        };

        let buttons = if decision.show_dual_mac_buttons {
            let url_of = |entry: Option<&PackageEntry>| {
                entry
                    .map(|e| e.download_url.trim().to_string())
                    .filter(|url| !url.is_empty())
            };
            ButtonLayout::DualMac {
                intel: Button::new("Download for Intel", url_of(table.mac_os.intel.as_ref())),
                apple_silicon: Button::new(
                    "Download for Apple Silicon",
                    url_of(table.mac_os.apple_silicon.as_ref()),
                ),
            }
        } else {
            ButtonLayout::Single {
                button: Button::new("Download", decision.download_url.clone()),
            }
        };

        Self {
            text,
            qr_panel: QrPanel::for_os(decision.os, decision.download_url.clone()),
            buttons,
        }
    }

    /// The button matching `choice`, if this layout has one.
    pub fn button(&self, choice: ButtonChoice) -> Option<&Button> {
        match (&self.buttons, choice) {
            (ButtonLayout::Single { button }, ButtonChoice::Default) => Some(button),
            (ButtonLayout::DualMac { intel, .. }, ButtonChoice::Intel) => Some(intel),
            (ButtonLayout::DualMac { apple_silicon, .. }, ButtonChoice::AppleSilicon) => {
                Some(apple_silicon)
            }
            _ => None,
        }
    }
}
