//! Client-side core of the shortener dashboard.
//!
//! - [`config`]: `config.toml` load/save/validate plus `.env` overrides
//! - [`session`]: credential storage, OAuth callback parsing, session restore
//! - [`shortener_client`]: typed calls against the shortener REST API
//! - [`views`]: UI-independent page state shared by the CLI and the TUI

pub mod config;
pub mod error;
pub mod session;
pub mod shortener_client;
pub mod views;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use shortener_client::ShortenerClient;

/// Directory name used under the platform config/data/log roots.
pub const DASHBOARD_APP_DIR: &str = "shortener-dashboard";
