//! Top-N retrieval of past entries similar to a new one.
//!
//! A linear scan scores every stored entry against the new embedding with
//! [`cosine_similarity`], then a stable descending sort ranks them. Entries
//! whose `(date, text)` equals the new entry's are skipped so a just-appended
//! entry is never returned as its own neighbour.
//!
//! Exclusion compares values, not positions: two distinct stored entries that
//! share a date and text with the new entry are all excluded.

use crate::error::Result;
use crate::journal::similarity::cosine_similarity;
use crate::journal::types::{JournalEntry, ScoredEntry};

/// Number of similar entries retrieved when nothing else is configured.
pub const DEFAULT_TOP_N: usize = 3;

/// Score and rank `entries` against `new_embedding`, most similar first.
///
/// Entries matching `(new_date, new_text)` are excluded. Ties keep store
/// order. At most `top_n` results are returned; an empty store (after
/// exclusion) yields an empty list. The first scoring failure aborts the
/// whole ranking.
pub fn rank_similar<'a>(
    new_embedding: &[f64],
    entries: &'a [JournalEntry],
    new_text: &str,
    new_date: &str,
    top_n: usize,
) -> Result<Vec<ScoredEntry<'a>>> {
    let mut scored = entries
        .iter()
        .filter(|entry| !entry.matches(new_date, new_text))
        .map(|entry| {
            cosine_similarity(new_embedding, &entry.embedding)
                .map(|score| ScoredEntry { score, entry })
        })
        .collect::<Result<Vec<_>>>()?;

    // `sort_by` is stable, so equal scores stay in insertion order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_n);

    tracing::debug!(
        candidates = entries.len(),
        returned = scored.len(),
        "ranked similar entries"
    );
    Ok(scored)
}

/// The `top_n` stored entries most similar to the new entry, most similar first.
///
/// Same semantics as [`rank_similar`] with the scores dropped.
pub fn retrieve_similar<'a>(
    new_embedding: &[f64],
    entries: &'a [JournalEntry],
    new_text: &str,
    new_date: &str,
    top_n: usize,
) -> Result<Vec<&'a JournalEntry>> {
    Ok(rank_similar(new_embedding, entries, new_text, new_date, top_n)?
        .into_iter()
        .map(|scored| scored.entry)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;

    fn entry(date: &str, text: &str, embedding: &[f64]) -> JournalEntry {
        JournalEntry::new(date, text, embedding.to_vec())
    }

    #[test]
    fn test_empty_store_returns_nothing() {
        let result = retrieve_similar(&[1.0, 0.0], &[], "today", "2024-01-03", 3).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_ranks_by_descending_score() {
        let entries = vec![
            entry("2024-01-01", "far", &[0.0, 1.0]),
            entry("2024-01-02", "near", &[1.0, 0.1]),
            entry("2024-01-03", "middle", &[1.0, 1.0]),
        ];
        let ranked = rank_similar(&[1.0, 0.0], &entries, "new", "2024-01-04", 3).unwrap();
        let texts: Vec<&str> = ranked.iter().map(|s| s.entry.text.as_str()).collect();
        assert_eq!(texts, vec!["near", "middle", "far"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_truncates_to_top_n() {
        let entries: Vec<JournalEntry> = (0..10)
            .map(|i| entry(&format!("2024-01-{:02}", i + 1), "day", &[1.0, i as f64]))
            .collect();
        let result = retrieve_similar(&[1.0, 0.0], &entries, "new", "2024-02-01", 3).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].date, "2024-01-01");
    }

    #[test]
    fn test_top_n_zero_returns_nothing() {
        let entries = vec![entry("2024-01-01", "a", &[1.0])];
        assert!(retrieve_similar(&[1.0], &entries, "b", "2024-01-02", 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_ties_keep_store_order() {
        let entries = vec![
            entry("2024-01-01", "first", &[2.0, 0.0]),
            entry("2024-01-02", "second", &[1.0, 0.0]),
            entry("2024-01-03", "third", &[3.0, 0.0]),
        ];
        let result = retrieve_similar(&[1.0, 0.0], &entries, "new", "2024-01-04", 3).unwrap();
        let texts: Vec<&str> = result.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_excludes_same_date_and_text() {
        let entries = vec![
            entry("2024-01-01", "slept all day", &[0.0, 1.0]),
            entry("2024-01-03", "finished report", &[1.0, 0.0]),
        ];
        let result =
            retrieve_similar(&[1.0, 0.0], &entries, "finished report", "2024-01-03", 3).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "slept all day");
    }

    #[test]
    fn test_excludes_every_duplicate_of_new_entry() {
        let entries = vec![
            entry("2024-01-03", "same", &[1.0, 0.0]),
            entry("2024-01-03", "same", &[0.9, 0.1]),
            entry("2024-01-02", "other", &[0.0, 1.0]),
        ];
        let result = retrieve_similar(&[1.0, 0.0], &entries, "same", "2024-01-03", 3).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "other");
    }

    #[test]
    fn test_excluded_entry_is_never_scored() {
        // The excluded entry has a malformed embedding; it must not cause a failure.
        let entries = vec![
            entry("2024-01-03", "today", &[1.0, 0.0, 0.0]),
            entry("2024-01-02", "yesterday", &[1.0, 0.0]),
        ];
        let result = retrieve_similar(&[1.0, 0.0], &entries, "today", "2024-01-03", 3).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_malformed_embedding_fails_whole_retrieval() {
        let entries = vec![
            entry("2024-01-01", "ok", &[1.0, 0.0]),
            entry("2024-01-02", "short", &[1.0]),
        ];
        let err = retrieve_similar(&[1.0, 0.0], &entries, "new", "2024-01-03", 3).unwrap_err();
        assert!(matches!(
            err,
            JournalError::DimensionMismatch { left: 2, right: 1 }
        ));
    }

    #[test]
    fn test_zero_embedding_fails_whole_retrieval() {
        let entries = vec![entry("2024-01-01", "blank", &[0.0, 0.0])];
        let err = retrieve_similar(&[1.0, 0.0], &entries, "new", "2024-01-03", 3).unwrap_err();
        assert!(matches!(err, JournalError::ZeroVector));
    }
}
