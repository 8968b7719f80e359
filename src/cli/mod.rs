pub mod check;
pub mod list;
pub mod search;
pub mod write;

use daylog::journal::JournalEntry;

/// Print entries as `- DATE | TEXT`, one per line.
fn print_entries(entries: &[JournalEntry]) {
    for entry in entries {
        println!("- {} | {}", entry.date, entry.text);
    }
}
