use anyhow::Result;
use shiftdraft_core::calendar_meta::format_minutes_to_time;

pub fn run(minutes: i64) -> Result<()> {
    println!("{}", format_minutes_to_time(minutes));
    Ok(())
}
