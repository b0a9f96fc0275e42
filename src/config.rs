// ABOUTME: Environment-driven configuration for providers, HTTP client, and favorites storage
// ABOUTME: Every setting has a default except the Spoonacular API key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SPOONACULAR_API_KEY` | unset |
//! | `SPOONACULAR_API_BASE` | `https://api.spoonacular.com` |
//! | `MEALDB_API_BASE` | `https://www.themealdb.com/api/json/v1/1` |
//! | `HTTP_TIMEOUT_SECS` | `30` |
//! | `HTTP_CONNECT_TIMEOUT_SECS` | `10` |
//! | `RECIPE_FINDER_STORAGE` | `file` |
//! | `RECIPE_FINDER_DATA_DIR` | platform data dir + `/recipe-finder` |

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

use crate::constants::endpoints::{MEALDB_API_BASE, SPOONACULAR_API_BASE};
use crate::constants::http::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::constants::service_names;
use crate::errors::{AppError, AppResult, ErrorCode};
use recipe_providers::SpoonacularConfig;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeFinderConfig {
    /// Spoonacular settings
    pub spoonacular: SpoonacularApiConfig,
    /// TheMealDB settings
    pub mealdb: MealDbApiConfig,
    /// Shared HTTP client settings
    pub http: HttpClientConfig,
    /// Favorites storage settings
    pub storage: StorageConfig,
}

impl RecipeFinderConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if `RECIPE_FINDER_STORAGE` names an
    /// unknown backend
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            spoonacular: SpoonacularApiConfig::from_env(),
            mealdb: MealDbApiConfig::from_env(),
            http: HttpClientConfig::from_env(),
            storage: StorageConfig::from_env()?,
        })
    }
}

/// Spoonacular API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoonacularApiConfig {
    /// API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL
    pub base_url: String,
}

impl SpoonacularApiConfig {
    /// Load Spoonacular configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("SPOONACULAR_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env_var_or("SPOONACULAR_API_BASE", SPOONACULAR_API_BASE),
        }
    }

    /// Client settings for the provider crate
    #[must_use]
    pub fn client_config(&self) -> SpoonacularConfig {
        SpoonacularConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// TheMealDB API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDbApiConfig {
    /// Base URL
    pub base_url: String,
}

impl MealDbApiConfig {
    /// Load TheMealDB configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_var_or("MEALDB_API_BASE", MEALDB_API_BASE),
        }
    }
}

/// Shared HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl HttpClientConfig {
    /// Load HTTP client configuration from environment
    ///
    /// Unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            timeout_secs: env_u64_or("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: env_u64_or(
                "HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        }
    }
}

/// Favorites storage backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One file per key in the data directory
    #[default]
    File,
    /// Process memory only
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("unknown storage backend '{other}' (expected 'file' or 'memory')"),
            )),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Favorites storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend kind
    pub backend: StorageBackend,
    /// Directory used by the file backend
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Load storage configuration from environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error for an unknown backend name
    pub fn from_env() -> AppResult<Self> {
        let backend = match env::var("RECIPE_FINDER_STORAGE") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::default(),
        };
        let data_dir = env::var("RECIPE_FINDER_DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);
        Ok(Self { backend, data_dir })
    }
}

/// Platform data directory for this application
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{}", service_names::RECIPE_FINDER)),
        |dir| dir.join(service_names::RECIPE_FINDER),
    )
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_u64_or(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparseable {key}={raw}, using {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!(
            "file".parse::<StorageBackend>().unwrap(),
            StorageBackend::File
        );
        assert_eq!(
            " Memory ".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        let error = "redis".parse::<StorageBackend>().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_default_data_dir_ends_with_service_name() {
        let dir = default_data_dir();
        assert!(dir.ends_with("recipe-finder") || dir.ends_with(".recipe-finder"));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = SpoonacularApiConfig {
            api_key: Some("secret".to_owned()),
            base_url: "http://localhost".to_owned(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
