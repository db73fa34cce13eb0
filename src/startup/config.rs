//! Startup configuration.
//!
//! Layers, later ones winning:
//!
//! 1. built-in defaults
//! 2. `<config_dir>/blogfront/config.toml`, or the file given with `--config`
//! 3. `BLOGFRONT_*` environment variables
//! 4. command-line flags, applied by the caller with the `with_*` builders

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::session::SessionStore;
use crate::state::UpdatePolicy;

const CONFIG_DIR: &str = "blogfront";
const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "BLOGFRONT_";

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Client configuration.
///
/// ```toml
/// api_origin = "https://api.blog.example"
/// log_filter = "blogfront=debug"
/// update_policy = "latest-issued"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Origin every endpoint is resolved against
    pub api_origin: String,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Where the session cookie is kept (default: platform data dir)
    pub session_file: Option<PathBuf>,
    /// How out-of-order user updates are resolved
    pub update_policy: UpdatePolicy,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            session_file: None,
            update_policy: UpdatePolicy::default(),
        }
    }
}

impl BlogConfig {
    /// `<config_dir>/blogfront/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// The layered provider, before extraction.
    ///
    /// With `explicit` set only that file is read; otherwise the default file
    /// is read when it exists.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(BlogConfig::default()));

        match explicit {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                if let Some(path) = Self::default_path().filter(|p| p.exists()) {
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load and validate.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(explicit))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: BlogConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Override the API origin.
    pub fn with_api_origin(mut self, origin: impl Into<String>) -> Self {
        self.api_origin = origin.into();
        self
    }

    /// Override the log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Override the session file location.
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    pub fn with_update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.update_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.origin_url().map(|_| ())
    }

    /// The parsed API origin. Only `http` and `https` with a host are valid.
    pub fn origin_url(&self) -> Result<url::Url, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidOrigin {
            origin: self.api_origin.clone(),
            reason: reason.to_string(),
        };

        let url = url::Url::parse(&self.api_origin).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host"));
        }
        Ok(url)
    }

    /// The session store this configuration points at.
    pub fn session_store(&self) -> Result<SessionStore, ConfigError> {
        self.session_file
            .clone()
            .or_else(SessionStore::default_path)
            .map(SessionStore::new)
            .ok_or(ConfigError::NoConfigDirectory)
    }
}
