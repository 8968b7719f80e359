use anyhow::{bail, Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use daylog::config::DaylogConfig;
use daylog::journal::EntryStore;
use daylog::openai::OpenAiClient;
use daylog::session;

/// Interactive session: show past entries, read today's entry, record it,
/// and print the productivity judgement.
pub async fn write(config: &DaylogConfig) -> Result<()> {
    println!("Journal program started");

    let store = EntryStore::new(config.resolved_journal_path());
    let mut entries = store.load().context("failed to load journal")?;

    if entries.is_empty() {
        println!("\nNo entries found.\n");
    } else {
        println!("\nYour past entries:");
        super::print_entries(&entries);
        println!("\n");
    }

    let text = read_entry("Write your journal entry: ").await?;
    if text.trim().is_empty() {
        bail!("empty entry, nothing saved");
    }

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let client = OpenAiClient::new(config).context("failed to build provider client")?;

    session::record(&store, &mut entries, &text, &today, &client).await?;
    println!("Entry saved with embedding.");

    let new_entry = entries.last().context("journal is empty after recording")?;
    let judgement =
        session::judge_recorded(&entries, new_entry, &client, config.retrieval.top_n).await?;

    println!("\nAI Productivity Judge:");
    println!("{}", judgement.text);

    Ok(())
}

/// Prompt on stdout and read one line from stdin, without its line ending.
async fn read_entry(prompt: &str) -> Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("failed to read journal entry")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
