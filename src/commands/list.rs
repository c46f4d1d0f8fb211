use anyhow::Result;
use owo_colors::OwoColorize;
use shiftdraft_core::draft_cache::DraftCache;
use shiftdraft_core::draft_key::DraftKey;
use shiftdraft_core::storage::SlotStorage;

use crate::render::render_draft;

pub fn run<S: SlotStorage>(cache: &DraftCache<S>, employee: Option<&str>) -> Result<()> {
    let lines = lines(cache, employee);

    if lines.is_empty() {
        println!("{}", "No drafts found".dimmed());
    }
    for line in lines {
        println!("{line}");
    }

    Ok(())
}

/// Drafts grouped by employee, in key order within each group.
fn lines<S: SlotStorage>(cache: &DraftCache<S>, employee: Option<&str>) -> Vec<String> {
    let drafts = cache.load();

    let mut entries: Vec<(String, String, String)> = drafts
        .iter()
        .filter_map(|(key, value)| {
            let (owner, date) = match DraftKey::parse(key) {
                Ok(draft_key) => {
                    let parts = draft_key.parts();
                    let date = format!("{}-{:02}-{:02}", parts.year, parts.month_index + 1, parts.day);
                    (parts.employee_id.to_string(), date)
                }
                // Keep keys this tool did not write visible under their raw name
                Err(_) => (String::from("?"), key.clone()),
            };

            if employee.is_some_and(|e| e != owner) {
                return None;
            }
            Some((owner, date, render_draft(key, value)))
        })
        .collect();

    entries.sort();

    let mut lines = Vec::new();
    let mut current: Option<&str> = None;

    for (owner, date, shift) in &entries {
        if current != Some(owner.as_str()) {
            if current.is_some() {
                lines.push(String::new());
            }
            lines.push(format!("👤 {}", owner).bold().to_string());
            current = Some(owner.as_str());
        }
        lines.push(format!("   {}  {}", date, shift));
    }

    lines
}
