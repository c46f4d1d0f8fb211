//! Typed view of draft payloads written by the shift editor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calendar_meta::{MINUTES_PER_DAY, format_minutes_to_time};
use crate::draft_cache::DraftStore;
use crate::draft_key::DraftKey;
use crate::error::{DraftError, DraftResult};

/// An unsaved edit to one employee's shift on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEdit {
    /// Minutes since midnight
    pub start_minutes: i64,
    /// Minutes since midnight; earlier than `start_minutes` for overnight shifts
    pub end_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ShiftEdit {
    pub fn new(start_minutes: i64, end_minutes: i64) -> Self {
        ShiftEdit {
            start_minutes,
            end_minutes,
            note: None,
        }
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn from_value(key: &str, value: &Value) -> DraftResult<Self> {
        serde_json::from_value(value.clone()).map_err(|e| DraftError::InvalidDraft {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn to_value(&self) -> DraftResult<Value> {
        serde_json::to_value(self).map_err(|e| DraftError::Serialization(e.to_string()))
    }

    pub fn is_overnight(&self) -> bool {
        self.end_minutes.rem_euclid(MINUTES_PER_DAY) < self.start_minutes.rem_euclid(MINUTES_PER_DAY)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_minutes - self.start_minutes).rem_euclid(MINUTES_PER_DAY)
    }

    /// "HH:MM-HH:MM"
    pub fn time_range(&self) -> String {
        format!(
            "{}-{}",
            format_minutes_to_time(self.start_minutes),
            format_minutes_to_time(self.end_minutes)
        )
    }
}

/// Every well-formed shift edit in `drafts`. Entries with a malformed key
/// or payload are skipped with a warning; the store itself is left as is.
pub fn shift_edits(drafts: &DraftStore) -> BTreeMap<DraftKey, ShiftEdit> {
    drafts
        .iter()
        .filter_map(|(key, value)| {
            let parsed = DraftKey::parse(key)
                .and_then(|draft_key| Ok((draft_key, ShiftEdit::from_value(key, value)?)));

            match parsed {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("skipping draft: {e}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft_key::make_draft_key;
    use serde_json::json;

    #[test]
    fn test_value_roundtrip_omits_empty_note() {
        let edit = ShiftEdit::new(540, 1020);
        let value = edit.to_value().unwrap();
        assert_eq!(value, json!({ "start_minutes": 540, "end_minutes": 1020 }));
        assert_eq!(ShiftEdit::from_value("k", &value).unwrap(), edit);
    }

    #[test]
    fn test_blank_note_is_dropped() {
        let edit = ShiftEdit::new(0, 60).with_note(Some("   ".into()));
        assert_eq!(edit.note, None);
        let edit = ShiftEdit::new(0, 60).with_note(Some("swap with Ana".into()));
        assert_eq!(edit.note.as_deref(), Some("swap with Ana"));
    }

    #[test]
    fn test_overnight_shift() {
        let night = ShiftEdit::new(22 * 60, 6 * 60);
        assert!(night.is_overnight());
        assert_eq!(night.duration_minutes(), 8 * 60);
        assert_eq!(night.time_range(), "22:00-06:00");

        let day = ShiftEdit::new(9 * 60, 17 * 60 + 30);
        assert!(!day.is_overnight());
        assert_eq!(day.duration_minutes(), 510);
    }

    #[test]
    fn test_from_value_rejects_wrong_shape() {
        let err = ShiftEdit::from_value("emp1:2024-5-17", &json!({ "start_minutes": "9" }));
        assert!(matches!(err, Err(DraftError::InvalidDraft { .. })));
    }

    #[test]
    fn test_shift_edits_skips_invalid_entries() {
        let mut drafts = DraftStore::new();
        let good = make_draft_key("emp1", 2024, 5, 17);
        drafts.insert(good.to_string(), ShiftEdit::new(540, 1020).to_value().unwrap());
        drafts.insert(make_draft_key("emp1", 2024, 5, 18).into(), json!([1, 2]));
        drafts.insert("not-a-key".into(), ShiftEdit::new(0, 60).to_value().unwrap());

        let edits = shift_edits(&drafts);

        assert_eq!(edits.len(), 1);
        assert_eq!(edits.get(&good), Some(&ShiftEdit::new(540, 1020)));
    }
}
