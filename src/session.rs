//! One journaling session: embed today's entry, persist it, recall similar
//! days, and ask for a productivity judgement.
//!
//! The order is fixed. Nothing is appended unless embedding succeeded, and
//! the store is saved before the judgement provider is called, so a failed
//! judgement never loses the entry.

use crate::embedding::EmbeddingProvider;
use crate::error::{JournalError, Result};
use crate::journal::{rank_similar, retrieve_similar, EntryStore, JournalEntry, ScoredEntry};
use crate::judge::{build_prompt, Judgement, JudgementProvider};

/// Embed `text` and append it to `entries` under `date`, then save the whole
/// collection to `store`.
///
/// On an embedding failure nothing is appended and nothing is written.
pub async fn record<E>(
    store: &EntryStore,
    entries: &mut Vec<JournalEntry>,
    text: &str,
    date: &str,
    embedder: &E,
) -> Result<()>
where
    E: EmbeddingProvider,
{
    let embedding = embedder
        .embed(text)
        .await
        .map_err(JournalError::EmbeddingProvider)?;

    entries.push(JournalEntry::new(date, text, embedding));
    if let Err(e) = store.save(entries) {
        entries.pop();
        return Err(e);
    }
    tracing::info!(date, total = entries.len(), "entry recorded");
    Ok(())
}

/// Judge `new_entry` against its `top_n` most similar entries in `entries`.
///
/// `new_entry` is normally the last element of `entries`; self-exclusion keeps
/// it (and any identical copy) out of its own neighbours.
pub async fn judge_recorded<J>(
    entries: &[JournalEntry],
    new_entry: &JournalEntry,
    judge: &J,
    top_n: usize,
) -> Result<Judgement>
where
    J: JudgementProvider,
{
    let JournalEntry {
        date,
        text,
        embedding,
    } = new_entry;
    let similar = retrieve_similar(embedding, entries, text, date, top_n)?;
    let prompt = build_prompt(text, &similar);

    let commentary = judge
        .judge(&prompt)
        .await
        .map_err(JournalError::JudgementProvider)?;

    Ok(Judgement {
        text: commentary,
        similar: similar.into_iter().cloned().collect(),
    })
}

/// Record `text` under `date`, then judge it against its `top_n` most similar
/// past entries.
pub async fn record_and_judge<E, J>(
    store: &EntryStore,
    entries: &mut Vec<JournalEntry>,
    text: &str,
    date: &str,
    embedder: &E,
    judge: &J,
    top_n: usize,
) -> Result<Judgement>
where
    E: EmbeddingProvider,
    J: JudgementProvider,
{
    record(store, entries, text, date, embedder).await?;
    let recorded: &[JournalEntry] = entries;
    let new_entry = &recorded[recorded.len() - 1];
    judge_recorded(recorded, new_entry, judge, top_n).await
}

/// Rank stored entries against an ad-hoc query without recording anything.
pub async fn search<'a, E>(
    entries: &'a [JournalEntry],
    query: &str,
    embedder: &E,
    top_n: usize,
) -> Result<Vec<ScoredEntry<'a>>>
where
    E: EmbeddingProvider,
{
    let embedding = embedder
        .embed(query)
        .await
        .map_err(JournalError::EmbeddingProvider)?;
    // The query has no date, so no stored entry can match it for exclusion.
    rank_similar(&embedding, entries, query, "", top_n)
}
