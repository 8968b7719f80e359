use anyhow::{Context, Result};

use daylog::config::DaylogConfig;
use daylog::journal::EntryStore;
use daylog::openai::OpenAiClient;

/// Show the stored entries most similar to `query`, with scores.
pub async fn search(config: &DaylogConfig, query: &str, top_n: Option<usize>) -> Result<()> {
    let store = EntryStore::new(config.resolved_journal_path());
    let entries = store.load().context("failed to load journal")?;

    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    let client = OpenAiClient::new(config).context("failed to build provider client")?;
    let top_n = top_n.unwrap_or(config.retrieval.top_n);
    let results = daylog::session::search(&entries, query, &client, top_n).await?;

    println!("Top {} of {} entries:\n", results.len(), entries.len());
    for (i, result) in results.iter().enumerate() {
        let preview = if result.entry.text.chars().count() > 120 {
            let cut: String = result.entry.text.chars().take(120).collect();
            format!("{cut}...")
        } else {
            result.entry.text.clone()
        };

        println!("  {}. {} (score: {:.4})", i + 1, result.entry.date, result.score);
        println!("     {}", preview);
        println!();
    }

    Ok(())
}
