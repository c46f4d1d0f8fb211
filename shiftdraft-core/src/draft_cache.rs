//! Local cache of unsaved shift edits.
//!
//! The whole mapping of draft key to draft payload lives in one storage slot
//! as a single JSON object, read and written as a unit. There is no
//! coordination between processes sharing a slot: the last save wins.

use serde_json::{Map, Value};

use crate::calendar_meta::{DayMeta, MonthMeta};
use crate::draft_key::make_draft_key;
use crate::error::{DraftError, DraftResult};
use crate::storage::SlotStorage;

/// Slot holding the drafts. A schema change must move to a new `_vN` slot.
pub const DRAFTS_SLOT: &str = "graph_l1l2_shift_drafts_v1";

/// Draft key to opaque draft payload.
pub type DraftStore = Map<String, Value>;

pub struct DraftCache<S> {
    storage: S,
    slot: String,
}

impl<S: SlotStorage> DraftCache<S> {
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DRAFTS_SLOT)
    }

    pub fn with_slot(storage: S, slot: &str) -> Self {
        DraftCache {
            storage,
            slot: slot.to_string(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the stored mapping. An absent slot is an empty mapping; a slot
    /// that is not a JSON object is `MalformedStoredData`.
    pub fn try_load(&self) -> DraftResult<DraftStore> {
        let Some(raw) = self.storage.get_item(&self.slot)? else {
            return Ok(DraftStore::new());
        };

        let malformed = |reason: String| DraftError::MalformedStoredData {
            slot: self.slot.clone(),
            reason,
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(drafts)) => {
                tracing::debug!(slot = %self.slot, count = drafts.len(), "loaded drafts");
                Ok(drafts)
            }
            Ok(other) => Err(malformed(format!("expected an object, found {}", kind_of(&other)))),
            Err(e) => Err(malformed(e.to_string())),
        }
    }

    /// Like [`try_load`](Self::try_load), but any failure degrades to an
    /// empty mapping with a warning.
    pub fn load(&self) -> DraftStore {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(slot = %self.slot, "discarding shift drafts: {e}");
            DraftStore::new()
        })
    }

    /// Overwrite the slot with the whole mapping.
    pub fn try_save(&self, drafts: &DraftStore) -> DraftResult<()> {
        let raw =
            serde_json::to_string(drafts).map_err(|e| DraftError::Serialization(e.to_string()))?;
        self.storage.set_item(&self.slot, &raw)?;

        tracing::debug!(slot = %self.slot, count = drafts.len(), "saved drafts");
        Ok(())
    }

    /// Best-effort [`try_save`](Self::try_save): failures are logged and dropped.
    pub fn save(&self, drafts: &DraftStore) {
        if let Err(e) = self.try_save(drafts) {
            tracing::warn!(slot = %self.slot, "could not save shift drafts: {e}");
        }
    }

    pub fn try_clear(&self) -> DraftResult<()> {
        self.storage.remove_item(&self.slot)
    }

    /// Drop every draft. Best effort, like [`save`](Self::save).
    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            tracing::warn!(slot = %self.slot, "could not clear shift drafts: {e}");
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Pair every day of `meta` with the employee's draft for that day, if any.
pub fn month_drafts<'a>(
    drafts: &'a DraftStore,
    employee_id: &str,
    meta: &MonthMeta,
) -> Vec<(DayMeta, Option<&'a Value>)> {
    meta.days
        .iter()
        .map(|day| {
            let key = make_draft_key(employee_id, meta.year, meta.month, day.day);
            (*day, drafts.get(key.as_str()))
        })
        .collect()
}
