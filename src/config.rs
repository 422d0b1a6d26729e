//! Application configuration from the environment.
//!
//! `.env` is loaded by the binary through `dotenvy` before `Config::from_env`
//! runs, so both real environment variables and a local `.env` work.

use std::path::PathBuf;

use tokio::net::TcpListener;

use crate::pricing::policy::PolicyError;
use crate::pricing::PricingPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Cannot read pricing policy {path}: {source}")]
    PolicyRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot parse pricing policy {path}: {source}")]
    PolicyParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Cannot bind {host}:{port}: {source}")]
    Bind {
        host: String,
        port: u16,
        source: std::io::Error,
    },

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// IP literal or host name, resolved when binding
    pub host: String,
    pub port: u16,
    /// ISO code attached to every amount in responses
    pub currency: String,
    /// Marketing site to serve alongside the API
    pub static_dir: Option<PathBuf>,
    /// JSON pricing policy; the built-in tariff is used when unset
    pub pricing_policy_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            currency: "EUR".to_string(),
            static_dir: None,
            pricing_policy_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            currency: get("CURRENCY").unwrap_or(defaults.currency),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            pricing_policy_path: get("PRICING_POLICY_PATH").map(PathBuf::from),
        })
    }

    /// Bind the listener, resolving `host` if it is a name.
    pub async fn bind(&self) -> Result<TcpListener, ConfigError> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .map_err(|source| ConfigError::Bind {
                host: self.host.clone(),
                port: self.port,
                source,
            })
    }

    /// Load and validate the pricing policy.
    pub fn load_policy(&self) -> Result<PricingPolicy, ConfigError> {
        let Some(path) = &self.pricing_policy_path else {
            return Ok(PricingPolicy::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::PolicyRead {
            path: path.clone(),
            source,
        })?;
        let policy: PricingPolicy =
            serde_json::from_str(&raw).map_err(|source| ConfigError::PolicyParse {
                path: path.clone(),
                source,
            })?;
        policy.validate()?;

        tracing::info!("Loaded pricing policy from {}", path.display());
        Ok(policy)
    }
}
