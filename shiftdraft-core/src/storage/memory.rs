use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{DraftError, DraftResult};
use crate::storage::SlotStorage;

/// In-process slot storage.
///
/// With a quota, a write whose slot keys and values together would exceed
/// `quota` bytes is rejected and the previous content stays in place, the
/// way browser local storage behaves.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        MemoryStorage {
            slots: Mutex::default(),
            quota: Some(quota),
        }
    }

    fn slots(&self) -> DraftResult<MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|_| DraftError::StorageUnavailable("memory storage lock poisoned".into()))
    }

    fn used_without(slots: &HashMap<String, String>, slot: &str) -> usize {
        slots
            .iter()
            .filter(|(k, _)| k.as_str() != slot)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl SlotStorage for MemoryStorage {
    fn get_item(&self, slot: &str) -> DraftResult<Option<String>> {
        Ok(self.slots()?.get(slot).cloned())
    }

    fn set_item(&self, slot: &str, value: &str) -> DraftResult<()> {
        let mut slots = self.slots()?;

        if let Some(quota) = self.quota {
            let needed = Self::used_without(&slots, slot) + slot.len() + value.len();
            if needed > quota {
                return Err(DraftError::QuotaExceeded {
                    slot: slot.to_string(),
                    needed,
                    quota,
                });
            }
        }

        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, slot: &str) -> DraftResult<()> {
        self.slots()?.remove(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_slot_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("missing").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        storage.set_item("slot", "one").unwrap();
        storage.set_item("slot", "two").unwrap();
        assert_eq!(storage.get_item("slot").unwrap().as_deref(), Some("two"));

        storage.remove_item("slot").unwrap();
        storage.remove_item("slot").unwrap();
        assert_eq!(storage.get_item("slot").unwrap(), None);
    }

    #[test]
    fn test_quota_rejects_and_keeps_previous_value() {
        let storage = MemoryStorage::with_quota(10);
        storage.set_item("slot", "abc").unwrap();

        let err = storage.set_item("slot", "abcdefghij").unwrap_err();
        assert!(matches!(
            err,
            DraftError::QuotaExceeded { needed: 14, quota: 10, .. }
        ));
        assert_eq!(storage.get_item("slot").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn test_quota_counts_other_slots() {
        let storage = MemoryStorage::with_quota(12);
        storage.set_item("a", "12345").unwrap();
        assert!(storage.set_item("b", "12345").is_ok());
        assert!(storage.set_item("c", "1").is_err());
    }
}
