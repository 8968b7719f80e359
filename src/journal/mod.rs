//! Journal core: entry records, the persisted entry store, cosine similarity,
//! and top-N retrieval of similar past entries.

pub mod health;
pub mod retrieve;
pub mod similarity;
pub mod store;
pub mod types;

pub use health::{check_journal_health, HealthReport};
pub use retrieve::{rank_similar, retrieve_similar, DEFAULT_TOP_N};
pub use similarity::cosine_similarity;
pub use store::EntryStore;
pub use types::{JournalEntry, ScoredEntry};
