//! Configuration service implementation.
//!
//! Loads the shell configuration from the platform config directory
//! (~/.config/claimflow/config.toml) and caches it to avoid repeated file
//! I/O.

use crate::config_store::ConfigStore;
use crate::paths::ClaimflowPaths;
use claimflow_core::config::ShellConfig;
use claimflow_core::{ClaimflowError, Result};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the shell configuration.
#[derive(Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<ShellConfig>>>,
    store: Arc<ConfigStore>,
}

impl ConfigService {
    /// Creates a service reading from the default platform location.
    ///
    /// The configuration is loaded lazily on first access to avoid blocking
    /// during initialization.
    pub fn new() -> Result<Self> {
        let path = ClaimflowPaths::config_file()
            .map_err(|e| ClaimflowError::config(e.to_string()))?;
        Ok(Self::with_store(ConfigStore::new(path)))
    }

    /// Creates a service over an explicit store (used by tests).
    pub fn with_store(store: ConfigStore) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            store: Arc::new(store),
        }
    }

    /// Gets the shell configuration, loading from file if not cached.
    ///
    /// A missing file is created with defaults; an unreadable file falls
    /// back to defaults without caching a failure state.
    pub fn get_config(&self) -> ShellConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.store.load_or_init() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load shell config, using defaults: {}", e);
                ShellConfig::default()
            }
        };

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Updates the configuration on disk and refreshes the cache.
    pub fn update<F>(&self, f: F) -> Result<ShellConfig>
    where
        F: FnOnce(&mut ShellConfig),
    {
        let updated = self.store.update(f)?;
        let mut write_lock = self.config.write().unwrap();
        *write_lock = Some(updated.clone());
        Ok(updated)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }
}
