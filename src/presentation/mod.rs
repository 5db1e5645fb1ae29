//! Presentation layer: turns a [`crate::resolver::PresentationDecision`] into the landing page's
//! visible elements and hands them to a [`Presenter`] sink.

mod layout;
mod terminal;

use anyhow::Result;
use serde::Serialize;

pub use layout::{Button, ButtonAction, ButtonChoice, ButtonLayout, PageLayout, QrPanel, TextFields};
pub use terminal::{OutputFormat, TerminalPresenter};

/// Shown when a download button without a URL is activated.
pub const DOWNLOAD_UNAVAILABLE: &str = "No download is available for this platform.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the page view; nothing else is rendered afterwards
    Fatal,
    /// Non-blocking, the page stays usable
    Info,
}

/// A user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Fatal,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn download_unavailable() -> Self {
        Self::info(DOWNLOAD_UNAVAILABLE)
    }
}

/// Sink for everything the page shows.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter: Send {
    /// Fill in text fields, the QR panel, and the buttons.
    fn render(&mut self, layout: &PageLayout) -> Result<()>;

    /// Show a notice to the user.
    fn notice(&mut self, notice: &Notice) -> Result<()>;

    /// Perform a full-page navigation to a download URL.
    fn navigate(&mut self, url: &str) -> Result<()>;
}
