use anyhow::{Context, Result};

use daylog::config::DaylogConfig;
use daylog::journal::EntryStore;

/// Print every stored entry.
pub fn list(config: &DaylogConfig) -> Result<()> {
    let store = EntryStore::new(config.resolved_journal_path());
    let entries = store.load().context("failed to load journal")?;

    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    super::print_entries(&entries);
    Ok(())
}
