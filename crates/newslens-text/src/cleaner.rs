//! Fixed-order text normalization pipeline.
//!
//! Every pass feeds the next and the order is load-bearing: the
//! repeated-character collapse and wire-source removal must see the text
//! before later passes destroy the punctuation and casing they match on.
//! The net post-condition is that output contains only ASCII Latin letters
//! and whitespace.

use std::sync::LazyLock;

use regex::Regex;

static WIRE_SOURCES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:reuters|associated press|ap|bbc|cnn|afp)\b").unwrap()
});
static BYLINE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Z]+\s*\(\s*[A-Za-z\s]*Reuters\)\s*-\s*").unwrap());
static BRACKETED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").unwrap());
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static DIGIT_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w*\d\w*").unwrap());
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]"##).unwrap()
});
static NON_WORD_OR_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static REPEATED_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());
static NON_ASCII: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\x00-\x7F]+").unwrap());
static NON_LATIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z\s]").unwrap());

/// Switches for the three optional leading passes. All default to on.
#[derive(Debug, Clone, Copy)]
pub struct CleanOptions {
    pub lowercase: bool,
    pub collapse_repeats: bool,
    pub strip_wire_sources: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            collapse_repeats: true,
            strip_wire_sources: true,
        }
    }
}

/// Collapse any run of three or more identical characters to a single one.
///
/// The regex crate has no backreferences, so this is a manual scan.
fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run_char: Option<char> = None;
    let mut run_len = 0usize;

    let flush = |out: &mut String, ch: Option<char>, len: usize| {
        if let Some(ch) = ch {
            let emit = if len >= 3 { 1 } else { len };
            for _ in 0..emit {
                out.push(ch);
            }
        }
    };

    for ch in text.chars() {
        if run_char == Some(ch) {
            run_len += 1;
        } else {
            flush(&mut out, run_char, run_len);
            run_char = Some(ch);
            run_len = 1;
        }
    }
    flush(&mut out, run_char, run_len);
    out
}

/// Normalize raw article text down to ASCII Latin letters and whitespace.
///
/// Total over string input: malformed, empty or non-Latin text yields an
/// empty or whitespace-only result rather than an error. The pass sequence
/// mirrors the contract exactly; several later passes overlap on purpose so
/// the final charset holds regardless of what earlier passes leave behind.
pub fn clean(text: &str, options: &CleanOptions) -> String {
    let mut text = if options.lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    if options.collapse_repeats {
        text = collapse_repeats(&text);
    }

    if options.strip_wire_sources {
        // The byline prefix must be matched while "Reuters" is still intact,
        // so it runs before the wire-source word removal.
        text = BYLINE_PREFIX.replace(&text, "").into_owned();
        text = WIRE_SOURCES.replace_all(&text, "").into_owned();
    }

    let text = BRACKETED.replace_all(&text, "");
    let text = NON_WORD.replace_all(&text, " ");
    let text = text.replace('\n', " ");
    let text = URL.replace_all(&text, "");
    let text = DIGIT_TOKEN.replace_all(&text, "");
    let text = PUNCTUATION.replace_all(&text, "");
    let text = NON_WORD_OR_SPACE.replace_all(&text, " ");
    let text = DIGITS.replace_all(&text, "");
    let text = REPEATED_SPACES.replace_all(&text, " ");
    let text = NON_ASCII.replace_all(&text, " ");
    NON_LATIN.replace_all(&text, " ").into_owned()
}
