//! Heuristic named-entity mention counting.
//!
//! Capitalization plus context: maximal runs of capitalized words are
//! candidate mentions, with sentence-initial singletons discarded unless a
//! trailing organization marker backs them up. Personal titles need no
//! special handling since a capitalized "Mr"/"Dr" joins the run itself.
//! This trades recall for a dependency-free annotator; the feature only
//! needs a count.

use std::sync::LazyLock;

use ahash::AHashSet;

const ORG_MARKERS: &[&str] = &["inc", "corp", "ltd", "co", "group", "party", "university"];

static ORG_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| ORG_MARKERS.iter().copied().collect());

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.all(|c| c.is_alphabetic() || c == '\'')
}

/// Count entity mentions in one sentence given its word tokens in original
/// casing.
pub fn count_mentions(words: &[&str]) -> usize {
    let mut mentions = 0;
    let mut i = 0;
    while i < words.len() {
        if !is_capitalized(words[i]) {
            i += 1;
            continue;
        }

        let start = i;
        while i < words.len() && is_capitalized(words[i]) {
            i += 1;
        }
        let run_len = i - start;

        if run_len >= 2 {
            mentions += 1;
            continue;
        }

        // Single capitalized word: sentence-initial ones are usually just
        // sentence case, kept only when an organization marker follows.
        let org = i < words.len() && ORG_SET.contains(words[i].to_lowercase().trim_end_matches('.'));
        if start > 0 || org {
            mentions += 1;
        }
    }
    mentions
}
