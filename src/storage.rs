//! Key-value persistence for container session state
//!
//! The shell's persisted-storage collaborator. The only artifact a panel
//! container writes is the last active panel id per region, under a fixed
//! key such as `sidebar.last-active-panel`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// External persisted key-value storage
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory storage for tests and ephemeral shells
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// File-backed storage persisting a string map as YAML
///
/// Loading is tolerant: a missing file starts empty, an unreadable or
/// malformed file logs a warning and starts empty rather than failing the
/// shell at startup. Every `set` writes through to disk.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: RefCell<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Load storage from the given file, or start empty
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let values = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(values) => {
                        tracing::debug!("Loaded shell state from {}", path.display());
                        values
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse state at {}: {}", path.display(), e);
                        BTreeMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read state at {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            }
        } else {
            tracing::debug!(
                "State file not found at {}, starting empty",
                path.display()
            );
            BTreeMap::new()
        };

        Self {
            path,
            values: RefCell::new(values),
        }
    }

    /// Default state file location
    ///
    /// Returns `~/.config/sidedock/state.yaml` on Unix,
    /// `%APPDATA%\sidedock\state.yaml` on Windows.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config| config.join("sidedock").join("state.yaml"))
    }

    fn flush(&self) {
        let content = match serde_yaml::to_string(&*self.values.borrow()) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to serialize shell state: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create {}: {}", parent.display(), e);
                return;
            }
        }

        if let Err(e) = std::fs::write(&self.path, content) {
            tracing::warn!("Failed to write state to {}: {}", self.path.display(), e);
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush();
    }
}
