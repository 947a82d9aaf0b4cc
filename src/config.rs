//! Server configuration parsed from environment variables.
//!
//! Leptos options (site root, bundle names, address) come from
//! `[package.metadata.leptos]`; the variables here override the parts that
//! differ per deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::sync::Arc;

use leptos::config::LeptosOptions;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while assembling startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port.
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },

    /// The Leptos metadata could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The outbound HTTP client could not be built.
    #[error("http client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Replaces the Leptos `site_root` when set.
    pub site_root: Option<String>,
    /// Image-analysis service that `POST /api/analyze` forwards to.
    pub analyze_url: Option<String>,
}

impl ServerConfig {
    /// Build config from a variable lookup.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FISHCAST_SITE_ROOT`: directory holding the built `pkg/` bundle
    /// - `FISHCAST_ANALYZE_URL`: upstream analysis endpoint; uploads fail
    ///   with a JSON error while unset
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_blank(&lookup, "PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };
        let site_root = non_blank(&lookup, "FISHCAST_SITE_ROOT");
        let analyze_url = non_blank(&lookup, "FISHCAST_ANALYZE_URL");
        Ok(Self { port, site_root, analyze_url })
    }

    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply the overrides to the options loaded from Cargo metadata.
    pub fn apply(&self, options: &mut LeptosOptions) {
        options.site_addr = SocketAddr::new(options.site_addr.ip(), self.port);
        if let Some(root) = &self.site_root {
            options.site_root = Arc::from(root.as_str());
        }
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Load Leptos options and apply the environment overrides.
///
/// # Errors
///
/// Returns `ConfigError::Leptos` if `[package.metadata.leptos]` is missing or
/// malformed.
pub fn leptos_options(config: &ServerConfig) -> Result<LeptosOptions, ConfigError> {
    let conf = leptos::config::get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut options = conf.leptos_options;
    config.apply(&mut options);
    Ok(options)
}
