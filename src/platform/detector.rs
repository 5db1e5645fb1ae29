use log::{debug, info, warn};
use std::time::Duration;

use super::{CanonicalPlatform, Cpu, Os, UNKNOWN};
use crate::navigator::{EntropyHint, HighEntropyValues, Navigator};

/// How long to wait for the high-entropy query before treating it as unavailable.
pub const DEFAULT_HINT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Lower-cased OS and CPU strings after all signals have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPlatform {
    pub os_name: String,
    pub cpu_name: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Merge the user-agent parse and, when needed, the high-entropy query into raw strings.
///
/// The query only runs when the user-agent did not reveal a CPU architecture.
/// Its values replace the parsed ones only when present.
#[tracing::instrument(skip(navigator))]
pub async fn detect_raw<N: Navigator + ?Sized>(
    navigator: &N,
    hint_timeout: Duration,
) -> RawPlatform {
    let parsed = navigator.parse_user_agent();
    let mut os_name = non_empty(parsed.os_name).unwrap_or_else(|| UNKNOWN.to_string());
    let mut cpu_name = non_empty(parsed.cpu_architecture).unwrap_or_else(|| UNKNOWN.to_string());
    debug!(
        "User-agent parse: os={}, cpu={}, browser={}",
        os_name,
        cpu_name,
        parsed.browser_name.as_deref().unwrap_or(UNKNOWN)
    );

    if os_name == UNKNOWN && navigator.user_agent().to_lowercase().contains("macintosh") {
        debug!("Parser found no OS but the user-agent carries a Macintosh token");
        os_name = "macOS".to_string();
    }

    if cpu_name.eq_ignore_ascii_case(UNKNOWN) {
        if navigator.supports_high_entropy_values() {
            if let Some(values) = query_high_entropy_values(navigator, hint_timeout).await {
                info!(
                    "High entropy values: platform={:?}, architecture={:?}",
                    values.platform, values.architecture
                );
                if let Some(platform) = non_empty(values.platform) {
                    os_name = platform;
                }
                if let Some(architecture) = non_empty(values.architecture) {
                    cpu_name = architecture;
                }
            }
        } else {
            debug!("High entropy values not supported, keeping user-agent result");
        }
    }

    RawPlatform {
        os_name: os_name.to_lowercase(),
        cpu_name: cpu_name.to_lowercase(),
    }
}

async fn query_high_entropy_values<N: Navigator + ?Sized>(
    navigator: &N,
    hint_timeout: Duration,
) -> Option<HighEntropyValues> {
    let hints = vec![EntropyHint::Architecture, EntropyHint::Platform];

    match tokio::time::timeout(hint_timeout, navigator.high_entropy_values(hints)).await {
        Ok(Ok(values)) => Some(values),
        Ok(Err(e)) => {
            debug!("High entropy values withheld: {:#}", e);
            None
        }
        Err(_) => {
            warn!(
                "High entropy query did not resolve within {:?}, falling back to user-agent",
                hint_timeout
            );
            None
        }
    }
}

/// Detect the visitor's canonical platform. Never fails: anything that cannot
/// be resolved comes back as `Unknown`.
#[tracing::instrument(skip(navigator))]
pub async fn detect<N: Navigator + ?Sized>(
    navigator: &N,
    hint_timeout: Duration,
) -> CanonicalPlatform {
    let raw = detect_raw(navigator, hint_timeout).await;
    let platform = CanonicalPlatform::from_raw(&raw.os_name, &raw.cpu_name);

    if platform.os == Os::MacOs && platform.cpu == Cpu::Unknown {
        // Safari exposes neither the architecture nor the query; do not guess.
        info!("macOS detected without a CPU architecture");
    }
    debug!("Detected platform {} from {:?}", platform, raw);

    platform
}
