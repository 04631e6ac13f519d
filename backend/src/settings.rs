//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags and `USER_POSTS_*` environment variables; the
//! accessors below fill in defaults and validate what was supplied.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Errors raised while loading or validating [`AppSettings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Sources could not be read or merged.
    #[error("failed to load settings: {message}")]
    Load { message: String },
    /// The bind host is not an IP address.
    #[error("invalid bind host {value:?}: {message}")]
    InvalidBindHost { value: String, message: String },
    /// The upstream base URL is malformed or cannot carry a path.
    #[error("invalid upstream base URL {value:?}: {message}")]
    InvalidUpstreamBaseUrl { value: String, message: String },
    /// A zero timeout would fail every request.
    #[error("upstream timeout must be at least one second")]
    ZeroUpstreamTimeout,
}

/// Runtime settings for the user posts service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_POSTS")]
pub struct AppSettings {
    /// IP address the HTTP listener binds to.
    pub bind_host: Option<String>,
    /// TCP port the HTTP listener binds to.
    #[ortho_config(default = 8081)]
    pub port: u16,
    /// Base URL of the upstream user and post API.
    pub upstream_base_url: Option<String>,
    /// Per-request upstream timeout in seconds; unset means no timeout.
    pub upstream_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Load settings from the process arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a source cannot be parsed.
    pub fn load_from_env() -> Result<Self, SettingsError> {
        Self::load_from_iter(std::env::args_os()).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Socket address for the HTTP listener.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST);
        let ip = host
            .parse::<IpAddr>()
            .map_err(|err| SettingsError::InvalidBindHost {
                value: host.to_owned(),
                message: err.to_string(),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Upstream base URL, falling back to the public placeholder API.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUpstreamBaseUrl`] for URLs that do not
    /// parse or cannot be used as a base.
    pub fn upstream_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .upstream_base_url
            .as_deref()
            .unwrap_or(DEFAULT_UPSTREAM_BASE_URL);
        let invalid = |message: String| SettingsError::InvalidUpstreamBaseUrl {
            value: raw.to_owned(),
            message,
        };
        let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_owned()));
        }
        Ok(url)
    }

    /// Per-request upstream timeout, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroUpstreamTimeout`] for a zero value.
    pub fn upstream_timeout(&self) -> Result<Option<Duration>, SettingsError> {
        match self.upstream_timeout_secs {
            Some(0) => Err(SettingsError::ZeroUpstreamTimeout),
            Some(secs) => Ok(Some(Duration::from_secs(secs))),
            None => Ok(None),
        }
    }
}
