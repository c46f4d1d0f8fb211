//! TUI rendering traits for shiftdraft types.
//!
//! Extension traits that add colored terminal rendering to shiftdraft-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use serde_json::Value;
use shiftdraft_core::calendar_meta::{DayMeta, MonthMeta, weekday_name};
use shiftdraft_core::shift_edit::ShiftEdit;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DayMeta {
    fn render(&self) -> String {
        let label = format!("{} {:>2}", self.weekday_name(), self.day);
        if self.is_weekend {
            label.dimmed().to_string()
        } else {
            label
        }
    }
}

impl Render for ShiftEdit {
    fn render(&self) -> String {
        let mut out = self.time_range().cyan().to_string();
        if self.is_overnight() {
            out.push_str(&format!(" {}", "(overnight)".yellow()));
        }
        if let Some(note) = &self.note {
            out.push_str(&format!(" {}", note.dimmed()));
        }
        out
    }
}

/// Render one stored draft: a shift edit when it has that shape, raw JSON otherwise.
pub fn render_draft(key: &str, value: &Value) -> String {
    match ShiftEdit::from_value(key, value) {
        Ok(edit) => edit.render(),
        Err(_) => value.to_string().dimmed().to_string(),
    }
}

/// Seven-column month grid starting on Sunday, weekends dimmed.
pub fn render_month_grid(meta: &MonthMeta) -> String {
    let header: Vec<String> = (0..7)
        .map(|wd| {
            let name = format!("{:>3}", weekday_name(wd));
            if wd == 0 || wd == 6 {
                name.dimmed().to_string()
            } else {
                name.bold().to_string()
            }
        })
        .collect();

    let mut lines = vec![header.join(" ")];
    let mut row: Vec<String> = vec!["   ".to_string(); meta.first_weekday() as usize];

    for day in &meta.days {
        let cell = format!("{:>3}", day.day);
        row.push(if day.is_weekend {
            cell.dimmed().to_string()
        } else {
            cell
        });

        if day.weekday == 6 {
            lines.push(row.join(" "));
            row.clear();
        }
    }

    if !row.is_empty() {
        lines.push(row.join(" "));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shiftdraft_core::calendar_meta::month_meta;

    #[test]
    fn test_grid_has_header_and_week_rows() {
        // June 2024 starts on a Saturday and spans six week rows
        let grid = render_month_grid(&month_meta(2024, 5).unwrap());
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains(" 1"));
        assert!(lines[6].contains("30"));
    }

    #[test]
    fn test_grid_for_month_starting_sunday() {
        // September 2024 starts on a Sunday: 30 days in five rows
        let grid = render_month_grid(&month_meta(2024, 8).unwrap());
        assert_eq!(grid.lines().count(), 6);
    }

    #[test]
    fn test_render_shift_edit() {
        let edit = ShiftEdit::new(22 * 60, 6 * 60).with_note(Some("cover".into()));
        let out = edit.render();
        assert!(out.contains("22:00-06:00"));
        assert!(out.contains("overnight"));
        assert!(out.contains("cover"));
    }

    #[test]
    fn test_render_draft_falls_back_to_json() {
        let out = render_draft("emp1:2024-5-17", &json!({ "custom": 1 }));
        assert!(out.contains("{\"custom\":1}"));

        let out = render_draft(
            "emp1:2024-5-17",
            &json!({ "start_minutes": 540, "end_minutes": 1020 }),
        );
        assert!(out.contains("09:00-17:00"));
    }
}
