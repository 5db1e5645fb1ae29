use anyhow::Result;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::{
    http::HttpClient,
    metadata::MetadataSource,
    navigator::Navigator,
    platform::DEFAULT_HINT_TIMEOUT,
    presentation::ButtonChoice,
};

/// User agent sent with the metadata request.
pub const USER_AGENT: &str = concat!("platpick/", env!("PLATPICK_VERSION"));

/// Everything one page view needs.
pub struct Config<N: Navigator> {
    pub navigator: N,
    pub http_client: HttpClient,
    pub metadata: MetadataSource,
    pub hint_timeout: Duration,
    /// Button to activate once the page is rendered
    pub activate: Option<ButtonChoice>,
}

impl<N: Navigator> Config<N> {
    pub fn new(navigator: N, metadata: MetadataSource) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        debug!("HTTP client ready, user agent {}", USER_AGENT);

        Ok(Self {
            navigator,
            http_client: HttpClient::new(client),
            metadata,
            hint_timeout: DEFAULT_HINT_TIMEOUT,
            activate: None,
        })
    }

    pub fn with_hint_timeout(mut self, hint_timeout: Duration) -> Self {
        self.hint_timeout = hint_timeout;
        self
    }

    pub fn with_activation(mut self, activate: Option<ButtonChoice>) -> Self {
        self.activate = activate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::ClientHintsNavigator;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_config_sends_user_agent() {
        // --- Create Mock Server ---
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("User-Agent", Matcher::Regex("^platpick/".to_string()))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        // --- Execute ---
        let config = Config::new(
            ClientHintsNavigator::new("Mozilla/5.0"),
            MetadataSource::Url(server.url()),
        )
        .unwrap();
        let table = crate::metadata::load(&config.http_client, &config.metadata).await;

        // --- Verify ---
        mock.assert_async().await;
        assert!(table.is_ok());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new(
            ClientHintsNavigator::new("Mozilla/5.0"),
            MetadataSource::File("metadata.json".into()),
        )
        .unwrap()
        .with_hint_timeout(Duration::from_millis(250))
        .with_activation(Some(ButtonChoice::Intel));

        assert_eq!(config.hint_timeout, Duration::from_millis(250));
        assert_eq!(config.activate, Some(ButtonChoice::Intel));
    }
}
