pub mod clear;
pub mod config;
pub mod list;
pub mod month;
pub mod set;
pub mod time;
pub mod unset;

use owo_colors::OwoColorize;
use shiftdraft_core::draft_cache::{DraftCache, DraftStore};
use shiftdraft_core::error::DraftError;
use shiftdraft_core::storage::SlotStorage;

/// Load the mapping for a read-modify-write. A corrupt slot starts over from
/// an empty mapping; a slot that cannot be read yields `None` so the caller
/// does not overwrite drafts it never saw.
fn load_for_update<S: SlotStorage>(cache: &DraftCache<S>) -> Option<DraftStore> {
    match cache.try_load() {
        Ok(drafts) => Some(drafts),
        Err(e @ DraftError::MalformedStoredData { .. }) => {
            tracing::warn!(slot = %cache.slot(), "discarding shift drafts: {e}");
            Some(DraftStore::new())
        }
        Err(e) => {
            println!("   {}", format!("Drafts not saved: {e}").red());
            None
        }
    }
}

/// Persist the whole mapping, reporting a failed write instead of aborting.
/// Returns whether the drafts reached storage.
fn save_drafts<S: SlotStorage>(cache: &DraftCache<S>, drafts: &DraftStore) -> bool {
    match cache.try_save(drafts) {
        Ok(()) => true,
        Err(e) => {
            println!("   {}", format!("Drafts not saved: {e}").red());
            false
        }
    }
}
