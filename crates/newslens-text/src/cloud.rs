//! Terminal word-cloud rendering.
//!
//! Words are drawn as rows scaled by frequency, the closest analogue of a
//! frequency-weighted cloud on a character grid.

use std::io::{self, Write};

use crate::frequency::FrequencyTable;

const MAX_BAR_WIDTH: usize = 48;
const MAX_WORDS: usize = 20;

/// Render the most frequent words of a filtered token stream as a scaled
/// bar chart.
pub fn render_cloud(
    w: &mut impl Write,
    tokens: &[String],
    title: &str,
) -> io::Result<()> {
    writeln!(w, "Word cloud for {title}:")?;

    let ranked = FrequencyTable::from_tokens(tokens, 1).top(MAX_WORDS);
    let Some(&(_, max_count)) = ranked.first() else {
        writeln!(w, "  (no words)")?;
        return Ok(());
    };

    let word_width = ranked
        .iter()
        .map(|(ngram, _)| ngram[0].len())
        .max()
        .unwrap_or(0);

    for (ngram, count) in &ranked {
        let bar_len = (count * MAX_BAR_WIDTH).div_ceil(max_count);
        writeln!(
            w,
            "  {:word_width$} {} {count}",
            ngram[0],
            "█".repeat(bar_len),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn renders_scaled_bars() {
        let tokens = toks(&["war", "war", "war", "war", "peace", "peace"]);
        let mut out = Vec::new();
        render_cloud(&mut out, &tokens, "title (fake)").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Word cloud for title (fake):"));
        let war_line = text.lines().find(|l| l.contains("war")).unwrap();
        let peace_line = text.lines().find(|l| l.contains("peace")).unwrap();
        let bars = |l: &str| l.chars().filter(|&c| c == '█').count();
        assert_eq!(bars(war_line), MAX_BAR_WIDTH);
        assert_eq!(bars(peace_line), MAX_BAR_WIDTH / 2);
    }

    #[test]
    fn empty_stream_renders_placeholder() {
        let mut out = Vec::new();
        render_cloud(&mut out, &[], "text (true)").unwrap();
        assert!(String::from_utf8(out).unwrap().contains("(no words)"));
    }
}
