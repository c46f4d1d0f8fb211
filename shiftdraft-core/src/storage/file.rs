use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{DraftError, DraftResult};
use crate::storage::SlotStorage;

const SLOT_EXTENSION: &str = "json";

/// Slot storage backed by a directory, one file per slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Path of the file holding `slot`.
    pub fn slot_path(&self, slot: &str) -> DraftResult<PathBuf> {
        let valid = !slot.is_empty()
            && !slot.starts_with('.')
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !valid {
            return Err(DraftError::InvalidSlot(slot.to_string()));
        }

        Ok(self.dir.join(format!("{slot}.{SLOT_EXTENSION}")))
    }
}

fn unavailable(path: &Path, e: std::io::Error) -> DraftError {
    DraftError::StorageUnavailable(format!("{}: {e}", path.display()))
}

impl SlotStorage for FileStorage {
    fn get_item(&self, slot: &str) -> DraftResult<Option<String>> {
        let path = self.slot_path(slot)?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable(&path, e)),
        }
    }

    fn set_item(&self, slot: &str, value: &str) -> DraftResult<()> {
        let path = self.slot_path(slot)?;
        let temp = path.with_extension(format!("{SLOT_EXTENSION}.tmp"));

        std::fs::create_dir_all(&self.dir).map_err(|e| unavailable(&self.dir, e))?;

        // Write-then-rename so readers never see a half-written slot
        std::fs::write(&temp, value).map_err(|e| unavailable(&temp, e))?;
        std::fs::rename(&temp, &path).map_err(|e| unavailable(&path, e))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote slot");
        Ok(())
    }

    fn remove_item(&self, slot: &str) -> DraftResult<()> {
        let path = self.slot_path(slot)?;

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable(&path, e)),
        }
    }
}
