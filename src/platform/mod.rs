//! Platform detection module
//!
//! This module reconciles the signals a browser exposes (a user-agent string
//! and, on some browsers, high-entropy client hints) into a single canonical
//! `(os, cpu)` pair used to pick an installer package.

mod canonical;
mod detector;
mod user_agent;

pub use canonical::{CanonicalPlatform, Cpu, Os, normalize_cpu, normalize_os};
pub use detector::{DEFAULT_HINT_TIMEOUT, RawPlatform, detect, detect_raw};
pub use user_agent::UserAgent;

/// Placeholder used for raw signal fields that could not be determined.
pub const UNKNOWN: &str = "unknown";
