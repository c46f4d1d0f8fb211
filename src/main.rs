mod commands;
mod dates;
mod logging;
mod render;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use shiftdraft_core::calendar_meta::parse_time_to_minutes;
use shiftdraft_core::config::ShiftdraftConfig;
use shiftdraft_core::draft_cache::DraftCache;
use shiftdraft_core::shift_edit::ShiftEdit;
use shiftdraft_core::storage::FileStorage;

#[derive(Parser)]
#[command(name = "shiftdraft")]
#[command(about = "Draft shift edits on a monthly calendar before committing them")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month, with one employee's drafts if given
    Month {
        /// Month to show (YYYY-MM)
        month: String,

        /// Show drafts for this employee
        #[arg(short, long)]
        employee: Option<String>,
    },
    /// Draft a shift for an employee on a day
    Set {
        employee: String,

        /// Day of the shift (YYYY-MM-DD)
        date: String,

        /// Shift start (HH:MM)
        #[arg(short, long)]
        start: String,

        /// Shift end (HH:MM), earlier than start for overnight shifts
        #[arg(short, long)]
        end: String,

        #[arg(short, long)]
        note: Option<String>,
    },
    /// Drop the draft for an employee on a day
    Unset {
        employee: String,

        /// Day of the shift (YYYY-MM-DD)
        date: String,
    },
    /// List stored drafts
    List {
        /// Only show this employee's drafts
        #[arg(short, long)]
        employee: Option<String>,
    },
    /// Drop every draft
    Clear,
    /// Format minutes since midnight as HH:MM
    Time {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Show config and storage paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Month { month, employee } => {
            let (config, cache) = open_drafts()?;
            let (year, month_index) = dates::parse_month(&month)?;
            let employee = resolve_employee(employee, &config);
            commands::month::run(&cache, year, month_index, employee.as_deref())
        }
        Commands::Set {
            employee,
            date,
            start,
            end,
            note,
        } => {
            let (_, cache) = open_drafts()?;
            let employee = require_employee_id(&employee)?;
            let date = dates::parse_day(&date)?;
            let edit = ShiftEdit::new(parse_time_to_minutes(&start)?, parse_time_to_minutes(&end)?)
                .with_note(note);
            commands::set::run(&cache, employee, date, edit)
        }
        Commands::Unset { employee, date } => {
            let (_, cache) = open_drafts()?;
            let employee = require_employee_id(&employee)?;
            let date = dates::parse_day(&date)?;
            commands::unset::run(&cache, employee, date)
        }
        Commands::List { employee } => {
            let (config, cache) = open_drafts()?;
            let employee = resolve_employee(employee, &config);
            commands::list::run(&cache, employee.as_deref())
        }
        Commands::Clear => {
            let (_, cache) = open_drafts()?;
            commands::clear::run(&cache)
        }
        Commands::Config => commands::config::run(&ShiftdraftConfig::load()?),
        Commands::Time { minutes } => commands::time::run(minutes),
    }
}

/// Config plus the file-backed draft cache it points at.
fn open_drafts() -> Result<(ShiftdraftConfig, DraftCache<FileStorage>)> {
    let config = ShiftdraftConfig::load()?;
    let cache = config.draft_cache();
    tracing::info!(
        storage = %config.storage_path().display(),
        slot = %config.slot,
        "using draft storage"
    );
    Ok((config, cache))
}

fn resolve_employee(employee: Option<String>, config: &ShiftdraftConfig) -> Option<String> {
    employee.or_else(|| config.default_employee.clone())
}

fn require_employee_id(employee: &str) -> Result<&str> {
    let employee = employee.trim();
    if employee.is_empty() {
        anyhow::bail!("Employee id must not be empty");
    }
    Ok(employee)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_negative_minutes() {
        let cli = Cli::try_parse_from(["shiftdraft", "time", "-30"]).unwrap();
        assert!(matches!(cli.command, Commands::Time { minutes: -30 }));
    }

    #[test]
    fn test_cli_parses_set() {
        let cli = Cli::try_parse_from([
            "shiftdraft", "-vv", "set", "emp1", "2024-06-17", "--start", "09:00", "--end", "17:00",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Set { ref employee, .. } if employee == "emp1"));
    }

    #[test]
    fn test_resolve_employee_falls_back_to_config() {
        let config = ShiftdraftConfig {
            default_employee: Some("emp7".into()),
            ..Default::default()
        };
        assert_eq!(resolve_employee(None, &config).as_deref(), Some("emp7"));
        assert_eq!(
            resolve_employee(Some("emp1".into()), &config).as_deref(),
            Some("emp1")
        );
    }

    #[test]
    fn test_require_employee_id() {
        assert_eq!(require_employee_id(" emp1 ").unwrap(), "emp1");
        assert!(require_employee_id("  ").is_err());
    }
}
