use crate::journal::JournalEntry;

const INSTRUCTIONS: &str = "You are a helpful assistant that reads a person's journal entries and rates \
their daily productivity on a scale from 1 (low) to 10 (high). Then provide a short piece of advice \
to improve productivity.";

const CLOSING: &str = "Please rate today's productivity and provide brief advice.";

/// Build the productivity-judge prompt for `today_text` and its similar days.
///
/// Similar days are listed as `N. DATE | TEXT`, numbered from 1 in the order given.
pub fn build_prompt(today_text: &str, similar: &[&JournalEntry]) -> String {
    let mut prompt = format!(
        "{INSTRUCTIONS}\n\nToday's entry:\n\"\"\"\n{today_text}\n\"\"\"\n\nHere are some similar days:\n"
    );
    for (i, entry) in similar.iter().enumerate() {
        prompt.push_str(&format!("{}. {} | {}\n", i + 1, entry.date, entry.text));
    }
    prompt.push('\n');
    prompt.push_str(CLOSING);
    prompt
}
