//! Runtime configuration read from the environment.

use crate::api::DEFAULT_API_URL;
use crate::cart::CART_STORAGE_KEY;
use crate::persist::{SnapshotError, SnapshotFormat};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DATA_DIR: &str = ".storefront";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("STOREFRONT_SNAPSHOT_FORMAT: {0}")]
    Format(#[from] SnapshotError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub snapshot_format: SnapshotFormat,
    pub cart_key: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            snapshot_format: SnapshotFormat::default(),
            cart_key: CART_STORAGE_KEY.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Read `STOREFRONT_*` variables, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Unset variables take their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = match lookup("STOREFRONT_API_URL") {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) => {
                return Err(ConfigError::InvalidUrl {
                    var: "STOREFRONT_API_URL",
                    value: url,
                })
            }
            None => defaults.api_url,
        };

        let data_dir = match lookup("STOREFRONT_DATA_DIR") {
            Some(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: "STOREFRONT_DATA_DIR",
                })
            }
            Some(dir) => PathBuf::from(dir),
            None => defaults.data_dir,
        };

        let snapshot_format = match lookup("STOREFRONT_SNAPSHOT_FORMAT") {
            Some(format) => format.parse()?,
            None => defaults.snapshot_format,
        };

        let cart_key = match lookup("STOREFRONT_CART_KEY") {
            Some(key) if key.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: "STOREFRONT_CART_KEY",
                })
            }
            Some(key) => key,
            None => defaults.cart_key,
        };

        Ok(Self {
            api_url,
            data_dir,
            snapshot_format,
            cart_key,
        })
    }

    pub fn graphql_endpoint(&self) -> String {
        format!("{}/graphql", self.api_url)
    }
}
