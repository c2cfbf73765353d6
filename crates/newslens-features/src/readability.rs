//! Readability formulas over text surface statistics.

use newslens_text::segment_sentences;

/// Rough English syllable count: vowel runs, with a silent trailing `e`
/// discounted. Never returns zero for a non-empty word.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let is_vowel = |c: char| "aeiouy".contains(c);

    let mut count = 0;
    let mut prev_vowel = false;
    for ch in word.chars() {
        let vowel = is_vowel(ch);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    if word.ends_with('e') && !word.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}

fn alphabetic_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphabetic()))
        .filter(|w| !w.is_empty())
        .collect()
}

fn surface_counts(text: &str) -> Option<(f64, f64, Vec<&str>)> {
    let words = alphabetic_words(text);
    if words.is_empty() {
        return None;
    }
    // A fragment without terminating punctuation still reads as one sentence.
    let sentences = segment_sentences(text).len().max(1);
    Some((words.len() as f64, sentences as f64, words))
}

/// Flesch reading ease; higher is easier. 0 for empty input.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let Some((num_words, num_sentences, words)) = surface_counts(text) else {
        return 0.0;
    };
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    206.835 - 1.015 * (num_words / num_sentences) - 84.6 * (syllables as f64 / num_words)
}

/// Gunning fog index; higher means harder. 0 for empty input.
pub fn gunning_fog(text: &str) -> f64 {
    let Some((num_words, num_sentences, words)) = surface_counts(text) else {
        return 0.0;
    };
    let complex_words = words.iter().filter(|w| count_syllables(w) >= 3).count();
    0.4 * ((num_words / num_sentences) + 100.0 * (complex_words as f64 / num_words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_counts_are_plausible() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("because"), 2);
        assert_eq!(count_syllables("government"), 3);
        assert_eq!(count_syllables("x"), 1);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(gunning_fog(""), 0.0);
        assert_eq!(flesch_reading_ease("   ..."), 0.0);
    }

    #[test]
    fn simple_text_reads_easier_than_dense_text() {
        let simple = "The cat sat. The dog ran. It was fun.";
        let dense = "Notwithstanding considerable institutional opposition, the administration \
                     promulgated comprehensive regulatory infrastructure unilaterally.";
        assert!(flesch_reading_ease(simple) > flesch_reading_ease(dense));
        assert!(gunning_fog(simple) < gunning_fog(dense));
    }

    #[test]
    fn unterminated_fragment_counts_as_one_sentence() {
        let score = flesch_reading_ease("just a short fragment");
        assert!(score.is_finite());
        assert!(score > 0.0);
    }
}
