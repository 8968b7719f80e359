//! Journal health report: the conditions that would make retrieval fail.

/// Summary of a loaded journal's embeddings.
#[derive(Debug, Default, PartialEq)]
pub struct HealthReport {
    pub entry_count: usize,
    /// Dimensionality of the first entry's embedding, if any entries exist.
    pub dimensions: Option<usize>,
    /// Indices of entries whose embedding length differs from `dimensions`.
    pub mismatched: Vec<usize>,
    /// Indices of entries whose embedding is all zeros (or empty).
    pub zero_vectors: Vec<usize>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.mismatched.is_empty() && self.zero_vectors.is_empty()
    }
}

/// Check that every embedding shares one dimensionality and none is a zero vector.
pub fn check_journal_health(entries: &[super::JournalEntry]) -> HealthReport {
    let dimensions = entries.first().map(|e| e.embedding.len());
    let mut report = HealthReport {
        entry_count: entries.len(),
        dimensions,
        ..Default::default()
    };

    for (i, entry) in entries.iter().enumerate() {
        if Some(entry.embedding.len()) != dimensions {
            report.mismatched.push(i);
        }
        if entry.embedding.iter().all(|&x| x == 0.0) {
            report.zero_vectors.push(i);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::JournalEntry;

    #[test]
    fn test_empty_journal_is_healthy() {
        let report = check_journal_health(&[]);
        assert_eq!(report, HealthReport::default());
        assert!(report.is_healthy());
    }

    #[test]
    fn test_flags_mismatch_and_zero_vectors() {
        let entries = vec![
            JournalEntry::new("2024-01-01", "a", vec![1.0, 0.0]),
            JournalEntry::new("2024-01-02", "b", vec![1.0]),
            JournalEntry::new("2024-01-03", "c", vec![0.0, 0.0]),
        ];
        let report = check_journal_health(&entries);
        assert_eq!(report.entry_count, 3);
        assert_eq!(report.dimensions, Some(2));
        assert_eq!(report.mismatched, vec![1]);
        assert_eq!(report.zero_vectors, vec![2]);
        assert!(!report.is_healthy());
    }
}
