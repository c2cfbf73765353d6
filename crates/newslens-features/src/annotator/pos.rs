//! Heuristic part-of-speech tagging, limited to the noun/verb distinction
//! the feature schema needs.

use std::sync::LazyLock;

use ahash::AHashSet;

/// Coarse tag: only nouns and verbs feed a feature, the rest is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Other,
}

/// Closed-class words that are neither nouns nor verbs for our purposes.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we",
    "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their", "who",
    "whom", "whose", "which", "what", "and", "or", "but", "nor", "so", "yet", "if", "because",
    "although", "while", "when", "where", "why", "how", "than", "as", "of", "in", "on", "at",
    "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "out", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "not", "only", "own", "same", "too", "very",
    "just", "also", "now", "is", "am", "are", "was", "were", "be", "been", "being", "will",
    "would", "shall", "should", "may", "might", "must", "can", "could", "do", "does", "did",
    "have", "has", "had", "having",
];

/// Frequent English verbs that suffix rules alone would miss.
const COMMON_VERBS: &[&str] = &[
    "accuse", "add", "admit", "agree", "allow", "announce", "appear", "argue", "ask", "became",
    "become", "began", "begin", "believe", "blame", "bring", "brought", "build", "built", "buy",
    "call", "came", "claim", "come", "confirm", "consider", "continue", "create", "cut",
    "decide", "declare", "demand", "deny", "describe", "die", "expect", "fall", "feel", "fell",
    "felt", "find", "found", "gave", "get", "give", "go", "got", "grew", "grow", "happen",
    "hear", "heard", "held", "help", "hold", "include", "insist", "keep", "kept", "knew",
    "know", "lead", "learn", "leave", "led", "left", "let", "lose", "lost", "made", "make",
    "mean", "meant", "meet", "met", "move", "need", "offer", "paid", "pay", "plan", "play",
    "prove", "provide", "put", "ran", "reach", "read", "refuse", "reject", "remain", "report",
    "run", "said", "sang", "saw", "say", "see", "seek", "seem", "sell", "send", "sent", "set",
    "show", "sold", "speak", "spend", "spent", "spoke", "stand", "stay", "stood", "stop",
    "take", "tell", "think", "thought", "told", "took", "tried", "try", "turn", "urge", "use",
    "vote", "want", "warn", "watch", "went", "win", "won", "work", "write", "wrote",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "hood", "ism", "ist",
    "ette", "dom", "eer",
];

static FUNCTION_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| FUNCTION_WORDS.iter().copied().collect());
static VERB_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| COMMON_VERBS.iter().copied().collect());

/// Tag a single word token. The caller handles punctuation separately.
pub fn tag(word: &str) -> PosTag {
    let lower = word.to_lowercase();
    if FUNCTION_SET.contains(lower.as_str()) {
        return PosTag::Other;
    }
    if lower.chars().any(|c| c.is_ascii_digit()) {
        return PosTag::Other;
    }

    if VERB_SET.contains(lower.as_str()) {
        return PosTag::Verb;
    }
    // Inflected forms of common verbs: said/says, asked/asking, etc.
    for suffix in ["s", "ed", "ing"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if VERB_SET.contains(stem) {
                return PosTag::Verb;
            }
            // "making" drops the e of "make".
            let mut restored = stem.to_string();
            restored.push('e');
            if suffix != "s" && VERB_SET.contains(restored.as_str()) {
                return PosTag::Verb;
            }
        }
    }
    if lower.len() > 5 && (lower.ends_with("ize") || lower.ends_with("ise") || lower.ends_with("ify"))
    {
        return PosTag::Verb;
    }

    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Noun;
    }
    // Capitalized tokens read as proper nouns.
    if word.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::Noun;
    }
    // Remaining content words default to noun, which matches the noun-heavy
    // distribution of news text closely enough for a ratio feature.
    if lower.len() >= 3 {
        PosTag::Noun
    } else {
        PosTag::Other
    }
}
