use anyhow::Result;
use owo_colors::OwoColorize;
use shiftdraft_core::draft_cache::DraftCache;
use shiftdraft_core::storage::SlotStorage;

pub fn run<S: SlotStorage>(cache: &DraftCache<S>) -> Result<()> {
    let count = cache.load().len();

    match cache.try_clear() {
        Ok(()) => println!("Cleared {} {}", count, if count == 1 { "draft" } else { "drafts" }),
        Err(e) => println!("   {}", format!("Drafts not cleared: {e}").red()),
    }

    Ok(())
}
