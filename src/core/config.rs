//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and bundle paths are not part of this struct, they come from
//! `[package.metadata.leptos]` (overridable with `LEPTOS_SITE_ADDR`).

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directives
    /// Example: info,brclog_contact=debug
    pub log_filter: String,

    /// Whether responses are Brotli/Gzip compressed
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("ENABLE_COMPRESSION").ok(),
        )
    }

    /// Build configuration from raw variable values
    pub fn from_vars(rust_log: Option<String>, enable_compression: Option<String>) -> Self {
        Self {
            log_filter: rust_log
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            compression: enable_compression.as_deref().is_none_or(parse_flag),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

/// Anything but an explicit "off" value enables the flag
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
