//! HTTP client module.

mod client;

pub use client::{HttpClient, status_of};
