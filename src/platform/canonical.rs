use std::fmt;

/// Operating systems the landing page knows how to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    MacOs,
    Ios,
    Android,
    Unknown,
}

impl Os {
    /// Mobile platforms are served through a QR code rather than a direct download.
    pub fn is_mobile(self) -> bool {
        matches!(self, Os::Ios | Os::Android)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Os::Windows => "Windows",
            Os::MacOs => "macOS",
            Os::Ios => "iOS",
            Os::Android => "Android",
            Os::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// CPU architectures that installer packages are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cpu {
    Arm64,
    Amd64,
    Unknown,
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cpu::Arm64 => "arm64",
            Cpu::Amd64 => "amd64",
            Cpu::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// The single `(os, cpu)` pair produced by one detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalPlatform {
    pub os: Os,
    pub cpu: Cpu,
}

impl CanonicalPlatform {
    pub fn new(os: Os, cpu: Cpu) -> Self {
        Self { os, cpu }
    }

    /// Normalize a pair of raw OS and CPU strings.
    pub fn from_raw(os_name: &str, cpu_name: &str) -> Self {
        Self {
            os: normalize_os(os_name),
            cpu: normalize_cpu(cpu_name),
        }
    }
}

impl fmt::Display for CanonicalPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.cpu)
    }
}

/// Map a free-form OS name to an [`Os`] by case-insensitive substring match.
///
/// "mac" is checked first since both "macintosh" and "macos" contain it.
pub fn normalize_os(raw: &str) -> Os {
    let name = raw.to_lowercase();

    if name.contains("mac") {
        Os::MacOs
    } else if name.contains("windows") {
        Os::Windows
    } else if name.contains("ios") {
        Os::Ios
    } else if name.contains("android") {
        Os::Android
    } else {
        Os::Unknown
    }
}

/// Map a free-form CPU architecture to a [`Cpu`] by case-insensitive substring match.
pub fn normalize_cpu(raw: &str) -> Cpu {
    let name = raw.to_lowercase();

    if name.contains("arm") {
        Cpu::Arm64
    } else if name.contains("x86") || name.contains("amd64") {
        Cpu::Amd64
    } else {
        Cpu::Unknown
    }
}
