//! Minimal user-agent parser.
//!
//! Extracts the OS name, CPU architecture, and browser name from a free-form
//! user-agent string. Names follow the conventions of the common browser-side
//! parsers ("Mac OS", "amd64", "arm64", ...) so the detector sees the same
//! shapes it would get in a page script. Fields the string does not reveal are
//! left as `None`.

use log::warn;
use regex::Regex;
use std::sync::LazyLock;

/// One ordered matching rule: the first rule whose pattern matches wins.
struct Rule {
    pattern: Regex,
    name: &'static str,
}

fn compile(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .filter_map(|(pattern, name)| match Regex::new(pattern) {
            Ok(pattern) => Some(Rule { pattern, name }),
            Err(e) => {
                warn!("Skipping invalid user-agent rule for {}: {}", name, e);
                None
            }
        })
        .collect()
}

fn first_match(rules: &[Rule], user_agent: &str) -> Option<String> {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(user_agent))
        .map(|rule| rule.name.to_string())
}

// iOS devices advertise "like Mac OS X" and Android advertises "Linux",
// so the narrower platforms come first.
static OS_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    compile(&[
        (r"(?i)\b(iphone|ipad|ipod)\b", "iOS"),
        (r"(?i)\bandroid\b", "Android"),
        (r"(?i)\bwindows\b", "Windows"),
        (r"(?i)\bcros\b", "Chrome OS"),
        (r"(?i)\b(macintosh|mac os x|mac_powerpc)\b", "Mac OS"),
        (r"(?i)\blinux\b", "Linux"),
    ])
});

// Safari on macOS reports "Intel Mac OS X" even on Apple Silicon, so "Intel"
// alone is not an architecture signal.
static CPU_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    compile(&[
        (r"(?i)\b(x86_64|x86-64|x64|win64|wow64|amd64)\b", "amd64"),
        (r"(?i)\b(aarch64|arm64)\b", "arm64"),
        (r"(?i)\barm(v\d+\w*)?\b", "arm"),
        (r"(?i)\b(i[3-6]86|x86)\b", "ia32"),
    ])
});

// Chromium derivatives also carry "Chrome/" and "Safari/", Chrome carries "Safari/".
static BROWSER_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    compile(&[
        (r"\bEdg(e|A|iOS)?/", "Edge"),
        (r"\b(OPR|Opera)/", "Opera"),
        (r"\bSamsungBrowser/", "Samsung Internet"),
        (r"\b(Firefox|FxiOS)/", "Firefox"),
        (r"\b(Chrome|CriOS)/", "Chrome"),
        (r"\bVersion/[\d.]+.*\bSafari/", "Safari"),
    ])
});

/// Structured fields extracted from a user-agent string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgent {
    pub os_name: Option<String>,
    pub cpu_architecture: Option<String>,
    pub browser_name: Option<String>,
}

impl UserAgent {
    pub fn parse(user_agent: &str) -> Self {
        Self {
            os_name: first_match(&OS_RULES, user_agent),
            cpu_architecture: first_match(&CPU_RULES, user_agent),
            browser_name: first_match(&BROWSER_RULES, user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
    const EDGE_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.2478.51";
    const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";
    const FIREFOX_MAC: &str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14.4; rv:125.0) Gecko/20100101 Firefox/125.0";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const CHROME_ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
    const SAMSUNG_ANDROID_ARM: &str = "Mozilla/5.0 (Linux; Android 13; SM-S911B; armv8l) AppleWebKit/537.36 (KHTML, like Gecko) SamsungBrowser/24.0 Chrome/117.0.0.0 Mobile Safari/537.36";
    const FIREFOX_LINUX_ARM: &str =
        "Mozilla/5.0 (X11; Linux aarch64; rv:125.0) Gecko/20100101 Firefox/125.0";

    #[test]
    fn test_parse_chrome_on_windows() {
        let ua = UserAgent::parse(CHROME_WINDOWS);

        assert_eq!(ua.os_name.as_deref(), Some("Windows"));
        assert_eq!(ua.cpu_architecture.as_deref(), Some("amd64"));
        assert_eq!(ua.browser_name.as_deref(), Some("Chrome"));
    }

    #[test]
    fn test_parse_edge_is_not_chrome() {
        let ua = UserAgent::parse(EDGE_WINDOWS);
        assert_eq!(ua.browser_name.as_deref(), Some("Edge"));
    }

    #[test]
    fn test_parse_safari_on_mac_has_no_cpu() {
        // "Intel Mac OS X" is frozen in Safari and says nothing about the CPU

        let ua = UserAgent::parse(SAFARI_MAC);

        assert_eq!(ua.os_name.as_deref(), Some("Mac OS"));
        assert_eq!(ua.cpu_architecture, None);
        assert_eq!(ua.browser_name.as_deref(), Some("Safari"));
    }

    #[test]
    fn test_parse_firefox_on_mac() {
        let ua = UserAgent::parse(FIREFOX_MAC);

        assert_eq!(ua.os_name.as_deref(), Some("Mac OS"));
        assert_eq!(ua.cpu_architecture, None);
        assert_eq!(ua.browser_name.as_deref(), Some("Firefox"));
    }

    #[test]
    fn test_parse_iphone_is_ios_not_mac() {
        let ua = UserAgent::parse(SAFARI_IPHONE);

        assert_eq!(ua.os_name.as_deref(), Some("iOS"));
        assert_eq!(ua.browser_name.as_deref(), Some("Safari"));
    }

    #[test]
    fn test_parse_android_is_not_linux() {
        let ua = UserAgent::parse(CHROME_ANDROID);

        assert_eq!(ua.os_name.as_deref(), Some("Android"));
        assert_eq!(ua.cpu_architecture, None);
        assert_eq!(ua.browser_name.as_deref(), Some("Chrome"));
    }

    #[test]
    fn test_parse_samsung_browser_arm() {
        let ua = UserAgent::parse(SAMSUNG_ANDROID_ARM);

        assert_eq!(ua.os_name.as_deref(), Some("Android"));
        assert_eq!(ua.cpu_architecture.as_deref(), Some("arm"));
        assert_eq!(ua.browser_name.as_deref(), Some("Samsung Internet"));
    }

    #[test]
    fn test_parse_linux_aarch64() {
        let ua = UserAgent::parse(FIREFOX_LINUX_ARM);

        assert_eq!(ua.os_name.as_deref(), Some("Linux"));
        assert_eq!(ua.cpu_architecture.as_deref(), Some("arm64"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(UserAgent::parse(""), UserAgent::default());
    }
}
