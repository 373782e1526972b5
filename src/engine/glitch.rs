//! Lexical glitch transformer.
//!
//! Decides per word whether the reveal shows it plainly, flickers it against a
//! vocabulary substitute, or smears it with combining marks. Rules are checked
//! in that order of precedence:
//!
//! 1. vocabulary hit → [`GlitchDecision::Substitute`]
//! 2. thematic word, or a small random chance → [`GlitchDecision::Mutation`]
//! 3. anything else → [`GlitchDecision::PassThrough`], sometimes pulsing
//!
//! Randomness is injected so a seeded generator replays the same decisions.

use crate::engine::config::GlitchConfig;
use crate::engine::token::Token;
use crate::engine::vocabulary::{is_thematic, VocabularyTable};
use rand::Rng;
use std::ops::RangeInclusive;
use unicode_segmentation::UnicodeSegmentation;

/// Combining diacritical marks block.
const COMBINING_MARKS: RangeInclusive<u32> = 0x0300..=0x036F;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlitchDecision {
    /// Shown as-is for one frame; `pulse` only changes how the frame is styled.
    PassThrough { pulse: bool },
    /// Flickers between `substitute` and the original word, settling on the original.
    Substitute { substitute: String },
    /// One frame of the word with combining marks stacked on it.
    Mutation { mutated: String },
}

impl GlitchDecision {
    pub fn plain() -> Self {
        GlitchDecision::PassThrough { pulse: false }
    }

    /// Number of frames this decision contributes to the reveal.
    pub fn frame_count(&self, flicker_cycles: usize) -> usize {
        match self {
            GlitchDecision::Substitute { .. } => flicker_cycles.max(1) * 2,
            _ => 1,
        }
    }
}

pub fn classify<R>(
    token: &Token,
    vocabulary: &VocabularyTable,
    config: &GlitchConfig,
    rng: &mut R,
) -> GlitchDecision
where
    R: Rng + ?Sized,
{
    if !token.is_word() || token.normalized.is_empty() {
        return GlitchDecision::plain();
    }

    if let Some(substitute) = vocabulary.lookup_key(&token.normalized) {
        return GlitchDecision::Substitute {
            substitute: substitute.to_string(),
        };
    }

    if is_thematic(&token.normalized) || rng.gen_bool(config.mutation_probability) {
        return GlitchDecision::Mutation {
            mutated: mutate(&token.text, config, rng),
        };
    }

    GlitchDecision::PassThrough {
        pulse: rng.gen_bool(config.pulse_probability),
    }
}

/// One decision per word token, in order. Whitespace is skipped.
pub fn classify_all<R>(
    tokens: &[Token],
    vocabulary: &VocabularyTable,
    config: &GlitchConfig,
    rng: &mut R,
) -> Vec<GlitchDecision>
where
    R: Rng + ?Sized,
{
    tokens
        .iter()
        .filter(|token| token.is_word())
        .map(|token| classify(token, vocabulary, config, rng))
        .collect()
}

/// Appends 1..=max_marks combining marks after randomly chosen graphemes.
pub fn mutate<R>(word: &str, config: &GlitchConfig, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let max_marks = config.max_marks.max(1);
    let mut out = String::with_capacity(word.len() * 2);

    for grapheme in word.graphemes(true) {
        out.push_str(grapheme);
        if grapheme.chars().all(char::is_whitespace) {
            continue;
        }
        if rng.gen_bool(config.mark_probability) {
            for _ in 0..rng.gen_range(1..=max_marks) {
                out.push(random_mark(rng));
            }
        }
    }

    out
}

fn random_mark<R>(rng: &mut R) -> char
where
    R: Rng + ?Sized,
{
    char::from_u32(rng.gen_range(COMBINING_MARKS)).unwrap_or('\u{0336}')
}

pub fn is_combining_mark(c: char) -> bool {
    COMBINING_MARKS.contains(&(c as u32))
}

/// Removes combining marks, undoing [`mutate`].
pub fn strip_marks(text: &str) -> String {
    text.chars().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::token::tokenize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vocab() -> VocabularyTable {
        VocabularyTable::from_pairs(vec![("void".to_string(), "VOID_REGION".to_string())])
    }

    fn quiet_config() -> GlitchConfig {
        GlitchConfig {
            mutation_probability: 0.0,
            pulse_probability: 0.0,
            ..GlitchConfig::default()
        }
    }

    #[test]
    fn test_vocabulary_hit_substitutes() {
        let mut rng = StdRng::seed_from_u64(1);
        let decision = classify(&Token::word("Void."), &vocab(), &quiet_config(), &mut rng);
        assert_eq!(
            decision,
            GlitchDecision::Substitute {
                substitute: "VOID_REGION".to_string()
            }
        );
    }

    #[test]
    fn test_vocabulary_wins_over_thematic() {
        // "void" is also thematic; the vocabulary rule has priority
        let mut rng = StdRng::seed_from_u64(2);
        let decision = classify(&Token::word("void"), &vocab(), &GlitchConfig::default(), &mut rng);
        assert!(matches!(decision, GlitchDecision::Substitute { .. }));
    }

    #[test]
    fn test_thematic_word_mutates() {
        let mut rng = StdRng::seed_from_u64(3);
        let decision = classify(&Token::word("ghost"), &vocab(), &quiet_config(), &mut rng);
        match decision {
            GlitchDecision::Mutation { mutated } => assert_eq!(strip_marks(&mutated), "ghost"),
            other => panic!("Expected mutation, got {:?}", other),
        }
    }

    #[test]
    fn test_ordinary_word_passes_through() {
        let mut rng = StdRng::seed_from_u64(4);
        let decision = classify(&Token::word("calls"), &vocab(), &quiet_config(), &mut rng);
        assert_eq!(decision, GlitchDecision::plain());
    }

    #[test]
    fn test_certain_mutation_probability() {
        let config = GlitchConfig {
            mutation_probability: 1.0,
            ..quiet_config()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let decision = classify(&Token::word("calls"), &vocab(), &config, &mut rng);
        assert!(matches!(decision, GlitchDecision::Mutation { .. }));
    }

    #[test]
    fn test_certain_pulse_probability() {
        let config = GlitchConfig {
            pulse_probability: 1.0,
            ..quiet_config()
        };
        let mut rng = StdRng::seed_from_u64(6);
        let decision = classify(&Token::word("calls"), &vocab(), &config, &mut rng);
        assert_eq!(decision, GlitchDecision::PassThrough { pulse: true });
    }

    #[test]
    fn test_punctuation_only_word_is_plain() {
        let mut rng = StdRng::seed_from_u64(7);
        let decision = classify(&Token::word("—"), &vocab(), &GlitchConfig::default(), &mut rng);
        assert_eq!(decision, GlitchDecision::plain());
    }

    #[test]
    fn test_whitespace_is_plain() {
        let mut rng = StdRng::seed_from_u64(8);
        let decision = classify(&Token::whitespace(" "), &vocab(), &GlitchConfig::default(), &mut rng);
        assert_eq!(decision, GlitchDecision::plain());
    }

    #[test]
    fn test_classification_repeatable_with_same_seed() {
        let tokens = tokenize("the void calls through a broken mirror of signal and fate");
        let config = GlitchConfig {
            mutation_probability: 0.5,
            pulse_probability: 0.5,
            ..GlitchConfig::default()
        };
        let first = classify_all(&tokens, &vocab(), &config, &mut StdRng::seed_from_u64(42));
        let second = classify_all(&tokens, &vocab(), &config, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_all_one_decision_per_word() {
        let tokens = tokenize("  the void\ncalls ");
        let decisions = classify_all(&tokens, &vocab(), &quiet_config(), &mut StdRng::seed_from_u64(9));
        assert_eq!(decisions.len(), 3);
    }

    #[test]
    fn test_mutate_mark_counts_bounded() {
        let config = GlitchConfig {
            mark_probability: 1.0,
            ..GlitchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(10);
        let mutated = mutate("oracle", &config, &mut rng);
        assert_eq!(strip_marks(&mutated), "oracle");

        let marks = mutated.chars().filter(|c| is_combining_mark(*c)).count();
        assert!(marks >= 6 && marks <= 18, "unexpected mark count {}", marks);
    }

    #[test]
    fn test_mutate_zero_probability_is_identity() {
        let config = GlitchConfig {
            mark_probability: 0.0,
            ..GlitchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(mutate("oracle", &config, &mut rng), "oracle");
    }

    #[test]
    fn test_frame_count() {
        let substitute = GlitchDecision::Substitute {
            substitute: "X".to_string(),
        };
        assert_eq!(substitute.frame_count(6), 12);
        assert_eq!(GlitchDecision::plain().frame_count(6), 1);
    }
}
