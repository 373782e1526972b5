//! Incremental reveal scheduler.
//!
//! Turns tokens plus their glitch decisions into the ordered frames of the
//! typewriter animation. Each frame is the committed prefix, the in-flight
//! variant of the current word and the cursor glyph. Whitespace never gets a
//! frame of its own; it is folded into the prefix and shows up with the next
//! word. A last frame without cursor carries the full committed text.
//!
//! Committed text only ever receives the original words, so the end state of
//! the animation does not depend on the random decisions made along the way.

use crate::engine::config::{GlitchConfig, RevealConfig};
use crate::engine::glitch::{classify_all, GlitchDecision};
use crate::engine::token::{tokenize, Token};
use crate::engine::vocabulary::VocabularyTable;
use rand::Rng;
use std::iter::FusedIterator;
use std::ops::Range;
use std::time::Duration;

pub const CURSOR: char = '█';

/// How the in-flight part of a frame should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Plain,
    Pulse,
    Substitute,
    Mutation,
    /// Final frame, nothing in flight.
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
    pub accent: Accent,
    /// Byte range of the in-flight variant inside `text`.
    pub active: Range<usize>,
}

impl Frame {
    pub fn is_final(&self) -> bool {
        self.accent == Accent::Settled
    }

    /// Text without the trailing cursor.
    pub fn content(&self) -> &str {
        self.text.strip_suffix(CURSOR).unwrap_or(&self.text)
    }

    pub fn active_text(&self) -> &str {
        self.text.get(self.active.clone()).unwrap_or("")
    }
}

struct PendingWord {
    word: String,
    decision: GlitchDecision,
    step: usize,
    total: usize,
    line_break: bool,
}

/// Lazy frame sequence. Forward-only; build a new one to replay.
pub struct RevealFrames {
    tokens: std::vec::IntoIter<Token>,
    decisions: std::vec::IntoIter<GlitchDecision>,
    config: RevealConfig,
    flicker_cycles: usize,
    committed: String,
    pending: Option<PendingWord>,
    line_break: bool,
    finished: bool,
}

pub fn schedule(
    tokens: Vec<Token>,
    decisions: Vec<GlitchDecision>,
    config: RevealConfig,
    flicker_cycles: usize,
) -> RevealFrames {
    RevealFrames {
        tokens: tokens.into_iter(),
        decisions: decisions.into_iter(),
        config,
        flicker_cycles: flicker_cycles.max(1),
        committed: String::new(),
        pending: None,
        line_break: false,
        finished: false,
    }
}

/// tokenize → classify → schedule in one go.
pub fn reveal<R>(
    text: &str,
    vocabulary: &VocabularyTable,
    glitch: &GlitchConfig,
    config: &RevealConfig,
    rng: &mut R,
) -> RevealFrames
where
    R: Rng + ?Sized,
{
    let tokens = tokenize(text);
    let decisions = classify_all(&tokens, vocabulary, glitch, rng);
    schedule(tokens, decisions, config.clone(), glitch.flicker_cycles)
}

impl RevealFrames {
    /// Text committed so far.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    fn begin_word(&mut self, token: Token) {
        let decision = self.decisions.next().unwrap_or_else(GlitchDecision::plain);
        let total = decision.frame_count(self.flicker_cycles);
        self.pending = Some(PendingWord {
            word: token.text,
            decision,
            step: 0,
            total,
            line_break: std::mem::take(&mut self.line_break),
        });
    }

    fn word_frame(&self, pending: &PendingWord) -> Frame {
        let (variant, accent, mut delay) = match &pending.decision {
            GlitchDecision::Substitute { substitute } => {
                // even steps show the substitute, odd steps the original
                let variant = if pending.step % 2 == 0 {
                    substitute.as_str()
                } else {
                    pending.word.as_str()
                };
                (variant, Accent::Substitute, self.config.flicker_delay())
            }
            GlitchDecision::Mutation { mutated } => {
                (mutated.as_str(), Accent::Mutation, self.config.mutation_delay())
            }
            GlitchDecision::PassThrough { pulse: true } => {
                (pending.word.as_str(), Accent::Pulse, self.config.pulse_delay())
            }
            GlitchDecision::PassThrough { pulse: false } => {
                (pending.word.as_str(), Accent::Plain, self.config.word_delay())
            }
        };

        if pending.line_break && pending.step == 0 {
            delay = delay.max(self.config.line_break_delay());
        }

        let start = self.committed.len();
        let mut text = String::with_capacity(start + variant.len() + CURSOR.len_utf8());
        text.push_str(&self.committed);
        text.push_str(variant);
        text.push(CURSOR);

        Frame {
            text,
            delay,
            accent,
            active: start..start + variant.len(),
        }
    }
}

impl Iterator for RevealFrames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        loop {
            if let Some(mut pending) = self.pending.take() {
                if pending.step < pending.total {
                    let frame = self.word_frame(&pending);
                    pending.step += 1;
                    if pending.step == pending.total {
                        self.committed.push_str(&pending.word);
                    } else {
                        self.pending = Some(pending);
                    }
                    return Some(frame);
                }
                self.committed.push_str(&pending.word);
            }

            match self.tokens.next() {
                Some(token) if token.is_word() => self.begin_word(token),
                Some(token) => {
                    if token.has_line_break() {
                        self.line_break = true;
                    }
                    self.committed.push_str(&token.text);
                }
                None => {
                    if self.finished {
                        return None;
                    }
                    self.finished = true;
                    let end = self.committed.len();
                    return Some(Frame {
                        text: self.committed.clone(),
                        delay: Duration::ZERO,
                        accent: Accent::Settled,
                        active: end..end,
                    });
                }
            }
        }
    }
}

impl FusedIterator for RevealFrames {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::token::tokenize;

    fn substitute(s: &str) -> GlitchDecision {
        GlitchDecision::Substitute {
            substitute: s.to_string(),
        }
    }

    fn frames_for(text: &str, decisions: Vec<GlitchDecision>) -> Vec<Frame> {
        schedule(tokenize(text), decisions, RevealConfig::default(), 6).collect()
    }

    #[test]
    fn test_plain_words_one_frame_each() {
        let frames = frames_for("the void calls", vec![GlitchDecision::plain(); 3]);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].text, "the█");
        assert_eq!(frames[1].text, "the void█");
        assert_eq!(frames[2].text, "the void calls█");
        assert_eq!(frames[3].text, "the void calls");
    }

    #[test]
    fn test_flicker_emits_twelve_alternating_frames() {
        let frames = frames_for(
            "the void calls",
            vec![GlitchDecision::plain(), substitute("VOID_REGION"), GlitchDecision::plain()],
        );
        // 1 + 12 + 1 + final
        assert_eq!(frames.len(), 15);

        let flicker = &frames[1..13];
        for (i, frame) in flicker.iter().enumerate() {
            let expected = if i % 2 == 0 { "VOID_REGION" } else { "void" };
            assert_eq!(frame.active_text(), expected, "flicker step {}", i);
            assert_eq!(frame.accent, Accent::Substitute);
            assert!(frame.text.starts_with("the "));
        }
        assert_eq!(flicker[11].content(), "the void");
        assert_eq!(frames[13].text, "the void calls█");
    }

    #[test]
    fn test_committed_prefix_never_holds_substitute() {
        let frames = frames_for(
            "dark path dark",
            vec![substitute("VOID_REGION"), GlitchDecision::plain(), substitute("VOID_REGION")],
        );
        let after_first = &frames[12];
        assert_eq!(after_first.text, "dark path█");
        assert!(!frames.last().unwrap().text.contains("VOID_REGION"));
    }

    #[test]
    fn test_mutation_not_committed() {
        let frames = frames_for(
            "a ghost here",
            vec![
                GlitchDecision::plain(),
                GlitchDecision::Mutation {
                    mutated: "g\u{0301}host".to_string(),
                },
                GlitchDecision::plain(),
            ],
        );
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[1].text, "a g\u{0301}host█");
        assert_eq!(frames[1].accent, Accent::Mutation);
        assert_eq!(frames[2].text, "a ghost here█");
    }

    #[test]
    fn test_cursor_on_every_frame_but_last() {
        let frames = frames_for(
            "one two\nthree",
            vec![substitute("X"), GlitchDecision::PassThrough { pulse: true }, GlitchDecision::plain()],
        );
        let (last, rest) = frames.split_last().unwrap();
        for frame in rest {
            assert!(frame.text.ends_with(CURSOR));
            assert!(!frame.is_final());
        }
        assert!(!last.text.ends_with(CURSOR));
        assert!(last.is_final());
    }

    #[test]
    fn test_final_frame_equals_input() {
        let text = "  ### Header\n\nbody text, with punctuation.  \n";
        let words = tokenize(text).iter().filter(|t| t.is_word()).count();
        let frames = frames_for(text, vec![substitute("SUB"); words]);
        assert_eq!(frames.last().unwrap().text, text);
    }

    #[test]
    fn test_empty_text_yields_single_final_frame() {
        let frames = frames_for("", vec![]);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].text, "");
        assert!(frames[0].is_final());
    }

    #[test]
    fn test_missing_decisions_default_to_plain() {
        let frames = frames_for("alpha beta gamma", vec![substitute("A")]);
        assert_eq!(frames.len(), 12 + 1 + 1 + 1);
        assert_eq!(frames[12].accent, Accent::Plain);
    }

    #[test]
    fn test_delays_per_variant() {
        let config = RevealConfig::default();
        let frames = frames_for(
            "a b c d",
            vec![
                GlitchDecision::plain(),
                GlitchDecision::PassThrough { pulse: true },
                GlitchDecision::Mutation {
                    mutated: "c".to_string(),
                },
                substitute("D"),
            ],
        );
        assert_eq!(frames[0].delay, config.word_delay());
        assert_eq!(frames[1].delay, config.pulse_delay());
        assert_eq!(frames[2].delay, config.mutation_delay());
        assert_eq!(frames[3].delay, config.flicker_delay());
        assert_eq!(frames.last().unwrap().delay, Duration::ZERO);
    }

    #[test]
    fn test_line_break_pauses_first_frame_of_next_word() {
        let config = RevealConfig::default();
        let frames = frames_for("one\ntwo three", vec![GlitchDecision::plain(); 3]);
        assert_eq!(frames[0].delay, config.word_delay());
        assert_eq!(frames[1].delay, config.line_break_delay());
        assert_eq!(frames[2].delay, config.word_delay());
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut frames = schedule(tokenize("x"), vec![], RevealConfig::default(), 6);
        assert!(frames.next().is_some());
        assert!(frames.next().unwrap().is_final());
        assert!(frames.next().is_none());
        assert!(frames.next().is_none());
    }

    #[test]
    fn test_committed_tracks_progress() {
        let mut frames = schedule(tokenize("a b"), vec![], RevealConfig::default(), 6);
        frames.next();
        assert_eq!(frames.committed(), "a");
        frames.next();
        assert_eq!(frames.committed(), "a b");
    }
}
