//! shiftdraft configuration.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::draft_cache::{DRAFTS_SLOT, DraftCache};
use crate::error::{DraftError, DraftResult};
use crate::storage::FileStorage;

static DEFAULT_STORAGE_PATH: &str = "~/.local/share/shiftdraft";

fn default_storage_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_PATH)
}

fn is_default_storage_dir(p: &PathBuf) -> bool {
    *p == default_storage_dir()
}

fn default_slot() -> String {
    DRAFTS_SLOT.to_string()
}

fn is_default_slot(s: &String) -> bool {
    s == DRAFTS_SLOT
}

/// Configuration at ~/.config/shiftdraft/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShiftdraftConfig {
    /// Directory holding the storage slots
    #[serde(default = "default_storage_dir", skip_serializing_if = "is_default_storage_dir")]
    pub storage_dir: PathBuf,

    /// Slot the drafts are kept in
    #[serde(default = "default_slot", skip_serializing_if = "is_default_slot")]
    pub slot: String,

    /// Employee shown when a command is run without --employee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_employee: Option<String>,
}

impl Default for ShiftdraftConfig {
    fn default() -> Self {
        ShiftdraftConfig {
            storage_dir: default_storage_dir(),
            slot: default_slot(),
            default_employee: None,
        }
    }
}

impl ShiftdraftConfig {
    pub fn config_path() -> DraftResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DraftError::Config("Could not determine config directory".into()))?
            .join("shiftdraft");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/shiftdraft/config.toml, writing a commented default
    /// file first if there is none.
    pub fn load() -> DraftResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            if let Err(e) = Self::create_default_config(&config_path) {
                tracing::warn!("could not write default config: {e}");
            }
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DraftResult<Self> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| DraftError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DraftError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> DraftResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DraftError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| DraftError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DraftResult<()> {
        let contents = format!(
            "\
# shiftdraft configuration

# Where draft slots are stored:
# storage_dir = \"{DEFAULT_STORAGE_PATH}\"

# Storage slot for drafts (bump the suffix when the draft format changes):
# slot = \"{DRAFTS_SLOT}\"

# Employee used when --employee is omitted:
# default_employee = \"emp1\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DraftError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DraftError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// `storage_dir` with `~` expanded.
    pub fn storage_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.storage_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn draft_cache(&self) -> DraftCache<FileStorage> {
        DraftCache::with_slot(FileStorage::new(self.storage_path()), &self.slot)
    }
}
