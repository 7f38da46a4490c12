//! Configuration service implementation.
//!
//! Loads the storefront configuration from `config.toml` and layers
//! environment variables on top. Credentials never have literal defaults.

use crate::paths::AurumPaths;
use aurum_core::config::StoreConfig;
use aurum_core::{AurumError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Environment variables recognised by [`ConfigService`].
pub mod env_keys {
    pub const FIREBASE_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
    pub const FIREBASE_API_KEY: &str = "FIREBASE_API_KEY";
    pub const FIRESTORE_COLLECTION: &str = "AURUM_FIRESTORE_COLLECTION";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Accepted for compatibility with older deployments
    pub const LEGACY_API_KEY: &str = "API_KEY";
    pub const GEMINI_MODEL: &str = "AURUM_GEMINI_MODEL";
}

/// Configuration service that loads and caches the storefront configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` means the platform default location.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file and environment.
    config: Arc<RwLock<Option<StoreConfig>>>,
}

impl ConfigService {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it on first access.
    pub fn get_config(&self) -> Result<StoreConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| AurumError::internal("configuration cache lock poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = match &self.path {
            Some(path) => Self::load_file(path)?,
            None => match AurumPaths::config_file() {
                Ok(path) => Self::load_file(&path)?,
                Err(err) => {
                    tracing::warn!("{}; using default configuration", err);
                    StoreConfig::default()
                }
            },
        };
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok());
        loaded.validate()?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| AurumError::internal("configuration cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Reads `path` as TOML. A missing file yields the defaults.
    pub fn load_file(path: &Path) -> Result<StoreConfig> {
        if !path.exists() {
            tracing::debug!("No configuration file at {:?}; using defaults", path);
            return Ok(StoreConfig::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Applies environment overrides read through `lookup`. Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut StoreConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(project_id) = get(env_keys::FIREBASE_PROJECT_ID) {
        config.firestore.project_id = Some(project_id);
    }
    if let Some(api_key) = get(env_keys::FIREBASE_API_KEY) {
        config.firestore.api_key = Some(api_key);
    }
    if let Some(collection) = get(env_keys::FIRESTORE_COLLECTION) {
        config.firestore.collection = collection;
    }
    if let Some(api_key) =
        get(env_keys::GEMINI_API_KEY).or_else(|| get(env_keys::LEGACY_API_KEY))
    {
        config.concierge.api_key = Some(api_key);
    }
    if let Some(model) = get(env_keys::GEMINI_MODEL) {
        config.concierge.model = model;
    }
}
