//! CLI `check` command: inspect the journal file and print a health report.

use anyhow::{Context, Result};

use daylog::config::DaylogConfig;
use daylog::journal::{check_journal_health, EntryStore};

/// Load the journal and report anything that would make retrieval fail.
pub fn check(config: &DaylogConfig) -> Result<()> {
    let path = config.resolved_journal_path();

    if !path.exists() {
        println!("Journal: not found at {}", path.display());
        println!("It will be created when you write your first entry.");
        return Ok(());
    }

    let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    let entries = EntryStore::new(&path)
        .load()
        .context("failed to load journal (may be corrupt)")?;
    let report = check_journal_health(&entries);

    println!("Journal Health Report");
    println!("=====================");
    println!();
    println!("Journal:           {}", path.display());
    println!("File size:         {}", format_bytes(file_size));
    println!("Entries:           {}", report.entry_count);
    match report.dimensions {
        Some(dims) => println!("Dimensions:        {dims}"),
        None => println!("Dimensions:        (no entries)"),
    }
    if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
        println!("Date range:        {} .. {}", first.date, last.date);
    }
    println!();

    for &i in &report.mismatched {
        println!(
            "  WARNING: entry {} ({}) has {} dimensions",
            i + 1,
            entries[i].date,
            entries[i].embedding.len()
        );
    }
    for &i in &report.zero_vectors {
        println!("  WARNING: entry {} ({}) has a zero embedding", i + 1, entries[i].date);
    }

    if report.is_healthy() {
        println!("Embedding check:   PASSED");
    } else {
        println!("Embedding check:   FAILED (retrieval will fail until these entries are fixed)");
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
