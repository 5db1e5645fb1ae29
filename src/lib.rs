pub mod config;
pub mod http;
pub mod metadata;
pub mod navigator;
pub mod page;
pub mod platform;
pub mod presentation;
pub mod resolver;
