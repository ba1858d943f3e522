//! Atomic on-disk storage for the shell configuration.
//!
//! Writes go through a temporary file plus atomic rename, guarded by an
//! advisory file lock, so a crashed or concurrent writer can never leave a
//! half-written config behind.

use claimflow_core::Result;
use claimflow_core::config::ShellConfig;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// A handle to the shell's TOML configuration file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store handle for the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration.
    ///
    /// A missing or empty file yields `None`; callers decide whether to
    /// fall back to defaults or write them out.
    pub fn load(&self) -> Result<Option<ShellConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let config: ShellConfig = toml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Saves the configuration atomically (tmp file + rename).
    pub fn save(&self, config: &ShellConfig) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(config)?;

        let tmp_path = self.temp_path();
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Loads the configuration, writing defaults first when missing.
    pub fn load_or_init(&self) -> Result<ShellConfig> {
        let _lock = FileLock::acquire(&self.path)?;

        if let Some(config) = self.load()? {
            return Ok(config);
        }

        let defaults = ShellConfig::default();
        self.save(&defaults)?;
        Ok(defaults)
    }

    /// Applies an update function under the file lock and persists the
    /// result.
    pub fn update<F>(&self, f: F) -> Result<ShellConfig>
    where
        F: FnOnce(&mut ShellConfig),
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut config = self.load()?.unwrap_or_default();
        f(&mut config);
        self.save(&config)?;
        Ok(config)
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "config.toml".to_string());
        self.path
            .with_file_name(format!(".{file_name}.tmp"))
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped; removing the
        // lock file is best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("config.toml"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_or_init_creates_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let store = ConfigStore::new(path.clone());

        let config = store.load_or_init().unwrap();
        assert_eq!(config, ShellConfig::default());
        assert!(path.exists());

        // A second call reads the file it just wrote.
        let reloaded = store.load_or_init().unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("config.toml"));

        let config = ShellConfig {
            log_level: "debug".to_string(),
            notifications_enabled: false,
            theme: "light".to_string(),
        };
        store.save(&config).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_update_persists_changes() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("config.toml"));

        let updated = store
            .update(|config| config.log_level = "trace".to_string())
            .unwrap();
        assert_eq!(updated.log_level, "trace");

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.log_level, "trace");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("config.toml"));
        store.save(&ShellConfig::default()).unwrap();

        assert!(!temp_dir.path().join(".config.toml.tmp").exists());
        assert!(temp_dir.path().join("config.toml").exists());
    }
}
