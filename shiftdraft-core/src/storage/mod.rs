//! Named-slot key/value storage.
//!
//! A slot holds one string. Absence is `Ok(None)`; any failure to reach the
//! backing store is an error the caller decides how to degrade.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::DraftResult;

pub trait SlotStorage {
    fn get_item(&self, slot: &str) -> DraftResult<Option<String>>;

    /// Replace the slot's content as a whole.
    fn set_item(&self, slot: &str, value: &str) -> DraftResult<()>;

    /// Removing an absent slot is not an error.
    fn remove_item(&self, slot: &str) -> DraftResult<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn get_item(&self, slot: &str) -> DraftResult<Option<String>> {
        (**self).get_item(slot)
    }

    fn set_item(&self, slot: &str, value: &str) -> DraftResult<()> {
        (**self).set_item(slot, value)
    }

    fn remove_item(&self, slot: &str) -> DraftResult<()> {
        (**self).remove_item(slot)
    }
}
