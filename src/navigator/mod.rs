//! Navigator abstraction over the browser signals used for detection.
//!
//! Everything the detector reads from its environment goes through the
//! [`Navigator`] trait: the raw user-agent string, its parsed fields, and the
//! optional high-entropy client-hint query. This keeps detection testable
//! without a browser.

mod client_hints;

use anyhow::Result;
use async_trait::async_trait;

use crate::platform::UserAgent;

pub use client_hints::ClientHintsNavigator;

/// Client hints that can be requested from the high-entropy query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntropyHint {
    Architecture,
    Platform,
}

/// Values returned by the high-entropy query. Browsers may leave any of them out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighEntropyValues {
    pub platform: Option<String>,
    pub architecture: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Navigator: Send + Sync {
    /// The raw user-agent string.
    fn user_agent(&self) -> String;

    /// Parse the user-agent string into OS, CPU, and browser fields.
    fn parse_user_agent(&self) -> UserAgent {
        UserAgent::parse(&self.user_agent())
    }

    /// Whether the runtime exposes the high-entropy client-hint query at all.
    fn supports_high_entropy_values(&self) -> bool;

    /// Request the given hints. An error means the browser withheld them.
    async fn high_entropy_values(&self, hints: Vec<EntropyHint>) -> Result<HighEntropyValues>;
}
