use anyhow::Result;
use owo_colors::OwoColorize;
use shiftdraft_core::calendar_meta::month_meta;
use shiftdraft_core::draft_cache::{DraftCache, month_drafts};
use shiftdraft_core::draft_key::make_draft_key;
use shiftdraft_core::storage::SlotStorage;

use crate::dates::month_title;
use crate::render::{Render, render_draft, render_month_grid};

pub fn run<S: SlotStorage>(
    cache: &DraftCache<S>,
    year: i32,
    month_index: u32,
    employee: Option<&str>,
) -> Result<()> {
    for line in lines(cache, year, month_index, employee)? {
        println!("{line}");
    }
    Ok(())
}

fn lines<S: SlotStorage>(
    cache: &DraftCache<S>,
    year: i32,
    month_index: u32,
    employee: Option<&str>,
) -> Result<Vec<String>> {
    let meta = month_meta(year, month_index as i32)?;
    let mut lines = vec![month_title(meta.year, meta.month).bold().to_string()];

    let Some(employee) = employee else {
        lines.push(render_month_grid(&meta));
        return Ok(lines);
    };

    lines.push(format!("👤 {employee}").dimmed().to_string());

    let drafts = cache.load();
    let days = month_drafts(&drafts, employee, &meta);
    let drafted = days.iter().filter(|(_, draft)| draft.is_some()).count();

    for (day, draft) in &days {
        let shift = match draft {
            Some(value) => {
                let key = make_draft_key(employee, meta.year, meta.month, day.day);
                render_draft(key.as_str(), value)
            }
            None => "-".dimmed().to_string(),
        };
        lines.push(format!("   {}  {}", day.render(), shift));
    }

    lines.push(String::new());
    lines.push(format!("   {drafted} of {} days drafted", meta.days_in_month).dimmed().to_string());

    Ok(lines)
}
