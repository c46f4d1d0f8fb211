//! Core of the shiftdraft ecosystem.
//!
//! - `calendar_meta` for the day list of a month and shift time formatting
//! - `draft_cache` for persisting unsaved shift edits, keyed by `draft_key`
//! - `storage` for the slot storage the cache is layered on

pub mod calendar_meta;
pub mod config;
pub mod draft_cache;
pub mod draft_key;
pub mod error;
pub mod shift_edit;
pub mod storage;

pub use calendar_meta::{DayMeta, MonthMeta, format_minutes_to_time, month_meta};
pub use draft_cache::{DRAFTS_SLOT, DraftCache, DraftStore, month_drafts};
pub use draft_key::{DraftKey, make_draft_key};
pub use error::{DraftError, DraftResult};
