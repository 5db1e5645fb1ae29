use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use super::{EntropyHint, HighEntropyValues, Navigator};

/// Navigator backed by a user-agent string and the `Sec-CH-UA-*` client hints
/// a browser sent alongside it.
///
/// The high-entropy query is only considered available when at least one hint
/// was supplied, mirroring browsers that do not implement client hints at all.
#[derive(Debug, Clone, Default)]
pub struct ClientHintsNavigator {
    user_agent: String,
    platform: Option<String>,
    architecture: Option<String>,
}

impl ClientHintsNavigator {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            platform: None,
            architecture: None,
        }
    }

    /// Set the `Sec-CH-UA-Platform` value, e.g. `"macOS"`.
    pub fn with_platform(mut self, platform: Option<&str>) -> Self {
        self.platform = platform.and_then(unquote);
        self
    }

    /// Set the `Sec-CH-UA-Arch` value, e.g. `"arm"`.
    pub fn with_architecture(mut self, architecture: Option<&str>) -> Self {
        self.architecture = architecture.and_then(unquote);
        self
    }
}

/// Client-hint header values are structured-field strings wrapped in quotes.
fn unquote(value: &str) -> Option<String> {
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[async_trait]
impl Navigator for ClientHintsNavigator {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn supports_high_entropy_values(&self) -> bool {
        self.platform.is_some() || self.architecture.is_some()
    }

    async fn high_entropy_values(&self, hints: Vec<EntropyHint>) -> Result<HighEntropyValues> {
        if !self.supports_high_entropy_values() {
            anyhow::bail!("High entropy values are not supported by this navigator");
        }
        debug!("Answering high entropy query for {:?}", hints);

        let mut values = HighEntropyValues::default();
        for hint in hints {
            match hint {
                EntropyHint::Platform => values.platform = self.platform.clone(),
                EntropyHint::Architecture => values.architecture = self.architecture.clone(),
            }
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"macOS\""), Some("macOS".to_string()));
        assert_eq!(unquote("  arm "), Some("arm".to_string()));
        assert_eq!(unquote("\"\""), None);
        assert_eq!(unquote(""), None);
    }

    #[test]
    fn test_without_hints_query_is_unsupported() {
        let navigator = ClientHintsNavigator::new("Mozilla/5.0");
        assert!(!navigator.supports_high_entropy_values());
    }

    #[tokio::test]
    async fn test_without_hints_query_fails() {
        let navigator = ClientHintsNavigator::new("Mozilla/5.0");

        let result = navigator
            .high_entropy_values(vec![EntropyHint::Platform])
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_query_returns_only_requested_hints() {
        // --- Setup ---
        let navigator = ClientHintsNavigator::new("Mozilla/5.0")
            .with_platform(Some("\"macOS\""))
            .with_architecture(Some("\"arm\""));

        // --- Execute ---
        let values = navigator
            .high_entropy_values(vec![EntropyHint::Architecture])
            .await
            .unwrap();

        // --- Verify ---
        assert_eq!(values.architecture.as_deref(), Some("arm"));
        assert_eq!(values.platform, None);
    }

    #[test]
    fn test_parse_user_agent_uses_raw_string() {
        let navigator = ClientHintsNavigator::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        );

        let parsed = navigator.parse_user_agent();

        assert_eq!(parsed.os_name.as_deref(), Some("Windows"));
        assert_eq!(parsed.cpu_architecture.as_deref(), Some("amd64"));
    }
}
