use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use shiftdraft_core::draft_cache::DraftCache;
use shiftdraft_core::shift_edit::ShiftEdit;
use shiftdraft_core::storage::SlotStorage;

use super::{load_for_update, save_drafts};
use crate::dates::draft_key_for;
use crate::render::Render;

pub fn run<S: SlotStorage>(
    cache: &DraftCache<S>,
    employee: &str,
    date: NaiveDate,
    edit: ShiftEdit,
) -> Result<()> {
    let key = draft_key_for(employee, date);

    let Some(mut drafts) = load_for_update(cache) else {
        return Ok(());
    };
    let replaced = drafts.insert(key.to_string(), edit.to_value()?).is_some();

    if save_drafts(cache, &drafts) {
        let symbol = if replaced { "~".yellow().to_string() } else { "+".green().to_string() };
        println!("{} {} {}", symbol, key, edit.render());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::FailingReads;
    use shiftdraft_core::draft_cache::DRAFTS_SLOT;
    use shiftdraft_core::shift_edit::shift_edits;
    use shiftdraft_core::storage::MemoryStorage;

    #[test]
    fn test_set_adds_and_replaces() {
        let cache = DraftCache::new(MemoryStorage::new());
        let date = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();

        run(&cache, "emp1", date, ShiftEdit::new(540, 1020)).unwrap();
        run(&cache, "emp1", date, ShiftEdit::new(600, 1080)).unwrap();
        run(&cache, "emp2", date, ShiftEdit::new(0, 480)).unwrap();

        let edits = shift_edits(&cache.load());
        assert_eq!(edits.len(), 2);
        let emp1 = edits
            .iter()
            .find(|(k, _)| k.as_str() == "emp1:2024-5-17")
            .map(|(_, e)| e.clone());
        assert_eq!(emp1, Some(ShiftEdit::new(600, 1080)));
    }

    #[test]
    fn test_set_keeps_unrelated_drafts() {
        let cache = DraftCache::new(MemoryStorage::new());
        let mut drafts = cache.load();
        drafts.insert("legacy:2024-0-1".into(), serde_json::json!({ "anything": true }));
        cache.save(&drafts);

        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        run(&cache, "emp1", date, ShiftEdit::new(540, 1020)).unwrap();

        let drafts = cache.load();
        assert_eq!(drafts.len(), 2);
        assert!(drafts.contains_key("legacy:2024-0-1"));
        assert!(drafts.contains_key("emp1:2024-0-2"));
    }

    #[test]
    fn test_set_keeps_drafts_when_read_fails() {
        let storage = FailingReads::default();
        let cache = DraftCache::new(&storage);
        let mut drafts = cache.load();
        for day in 1..=10 {
            drafts.insert(format!("emp1:2024-5-{day}"), serde_json::json!(day));
        }
        cache.save(&drafts);

        storage.fail_reads.set(true);
        let date = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
        run(&cache, "emp2", date, ShiftEdit::new(540, 1020)).unwrap();

        storage.fail_reads.set(false);
        assert_eq!(cache.load(), drafts);
    }

    #[test]
    fn test_set_over_corrupt_slot_starts_fresh() {
        let storage = MemoryStorage::new();
        storage.set_item(DRAFTS_SLOT, "[1,2]").unwrap();
        let cache = DraftCache::new(&storage);

        let date = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
        run(&cache, "emp1", date, ShiftEdit::new(540, 1020)).unwrap();

        let drafts = cache.try_load().unwrap();
        assert_eq!(drafts.len(), 1);
        assert!(drafts.contains_key("emp1:2024-5-17"));
    }

    #[test]
    fn test_set_over_quota_does_not_fail() {
        let cache = DraftCache::new(MemoryStorage::with_quota(8));
        let date = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();

        assert!(run(&cache, "emp1", date, ShiftEdit::new(540, 1020)).is_ok());
        assert!(cache.load().is_empty());
    }
}
