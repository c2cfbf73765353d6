//! Embedded emotion-affect lexicon.
//!
//! Maps words to positive/negative categories and reports NRC-style affect
//! frequencies: each category's share of all affect-bearing hits in the
//! text, 0 when the lexicon matches nothing.

use ahash::AHashSet;

const POSITIVE: &[&str] = &[
    "accomplish", "achieve", "admire", "advance", "agree", "amazing", "appreciate", "approve",
    "awesome", "beautiful", "benefit", "best", "better", "bless", "brave", "bright", "calm",
    "celebrate", "champion", "charity", "cheer", "clean", "comfort", "confident", "congratulate",
    "courage", "create", "delight", "dignity", "eager", "easy", "effective", "encourage",
    "enjoy", "excellent", "excite", "fair", "faith", "famous", "fantastic", "favor", "free",
    "freedom", "friend", "gain", "generous", "glad", "glory", "good", "grateful", "great",
    "grow", "happy", "heal", "healthy", "help", "honest", "honor", "hope", "improve", "inspire",
    "joy", "justice", "kind", "laugh", "love", "loyal", "lucky", "nice", "optimistic", "peace",
    "perfect", "pleasant", "praise", "pride", "progress", "prosper", "protect", "proud", "reward",
    "safe", "satisfy", "secure", "share", "smart", "smile", "strong", "succeed", "success",
    "support", "thank", "triumph", "trust", "truth", "victory", "warm", "welcome", "win",
    "wonderful", "worthy",
];

const NEGATIVE: &[&str] = &[
    "abuse", "accuse", "afraid", "anger", "angry", "attack", "awful", "bad", "betray", "blame",
    "bomb", "break", "broken", "brutal", "chaos", "cheat", "collapse", "conflict", "corrupt",
    "crash", "crime", "criminal", "crisis", "cruel", "damage", "danger", "dangerous", "dark",
    "dead", "death", "defeat", "deny", "despair", "destroy", "die", "dirty", "disaster",
    "disease", "dishonest", "distrust", "doubt", "dread", "enemy", "evil", "fail", "failure",
    "fake", "fear", "fight", "fraud", "guilt", "harm", "hate", "hell", "horrible", "hostile",
    "hurt", "illegal", "injure", "jail", "kill", "lie", "lose", "loss", "mad", "murder",
    "pain", "panic", "poison", "poor", "prison", "problem", "punish", "rage", "refuse",
    "reject", "riot", "risk", "ruin", "sad", "scandal", "scare", "shame", "shoot", "sick",
    "steal", "suffer", "terrible", "terror", "threat", "threaten", "tragedy", "ugly",
    "victim", "violence", "violent", "war", "weak", "worry", "worst", "wrong",
];

/// Affect share per category; both 0 when the text has no lexicon hits.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AffectScores {
    pub positive: f64,
    pub negative: f64,
}

/// Word → emotion-category lexicon.
#[derive(Debug, Clone)]
pub struct AffectLexicon {
    positive: AHashSet<&'static str>,
    negative: AHashSet<&'static str>,
}

impl AffectLexicon {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE.iter().copied().collect(),
            negative: NEGATIVE.iter().copied().collect(),
        }
    }

    /// Affect frequencies over lowercase word tokens: category hits divided
    /// by total affect hits.
    pub fn frequencies<T: AsRef<str>>(&self, tokens: &[T]) -> AffectScores {
        let mut positive = 0usize;
        let mut negative = 0usize;
        for token in tokens {
            let token = token.as_ref();
            if self.positive.contains(token) {
                positive += 1;
            }
            if self.negative.contains(token) {
                negative += 1;
            }
        }

        let total = positive + negative;
        if total == 0 {
            return AffectScores::default();
        }
        AffectScores {
            positive: positive as f64 / total as f64,
            negative: negative as f64 / total as f64,
        }
    }
}

impl Default for AffectLexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_matches_scores_zero() {
        let lexicon = AffectLexicon::new();
        assert_eq!(lexicon.frequencies(&["the", "weather", "report"]), AffectScores::default());
        assert_eq!(lexicon.frequencies::<&str>(&[]), AffectScores::default());
    }

    #[test]
    fn frequencies_are_shares_of_affect_hits() {
        let lexicon = AffectLexicon::new();
        let scores = lexicon.frequencies(&["war", "fear", "hope", "today"]);
        assert!((scores.negative - 2.0 / 3.0).abs() < 1e-9);
        assert!((scores.positive - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn purely_positive_text() {
        let lexicon = AffectLexicon::new();
        let scores = lexicon.frequencies(&["great", "win", "celebrate"]);
        assert_eq!(scores.positive, 1.0);
        assert_eq!(scores.negative, 0.0);
    }
}
