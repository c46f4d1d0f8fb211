use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use shiftdraft_core::config::ShiftdraftConfig;

pub fn run(config: &ShiftdraftConfig) -> Result<()> {
    let config_path = ShiftdraftConfig::config_path()?;
    for line in lines(config, &config_path)? {
        println!("{line}");
    }
    Ok(())
}

fn lines(config: &ShiftdraftConfig, config_path: &Path) -> Result<Vec<String>> {
    let cache = config.draft_cache();

    let mut lines = vec![
        "Paths".bold().to_string(),
        format!("  Config:     {}", config_path.display()),
        format!("  Storage:    {}", config.storage_path().display()),
        format!("  Drafts:     {}", cache.storage().slot_path(cache.slot())?.display()),
    ];

    if let Some(employee) = &config.default_employee {
        lines.push(String::new());
        lines.push("Defaults".bold().to_string());
        lines.push(format!("  Employee:   {}", employee));
    }

    Ok(lines)
}
