use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use shiftdraft_core::draft_cache::DraftCache;
use shiftdraft_core::storage::SlotStorage;

use super::{load_for_update, save_drafts};
use crate::dates::draft_key_for;

pub fn run<S: SlotStorage>(cache: &DraftCache<S>, employee: &str, date: NaiveDate) -> Result<()> {
    let key = draft_key_for(employee, date);

    let Some(mut drafts) = load_for_update(cache) else {
        return Ok(());
    };
    if drafts.remove(key.as_str()).is_none() {
        println!("{}", format!("No draft for {key}").dimmed());
        return Ok(());
    }

    if save_drafts(cache, &drafts) {
        println!("{} {}", "-".red(), key);
    }

    Ok(())
}
