// Tuning for the glitch transformer, reveal pacing and boot log.
// Durations are stored in milliseconds so they read naturally in config.toml.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Glitch transformer tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlitchConfig {
    /// Substitute/original pairs shown for a vocabulary hit (default 6, so 12 frames)
    pub flicker_cycles: usize,

    /// Chance that an ordinary word is mutated anyway (default 3%)
    pub mutation_probability: f64,

    /// Chance per grapheme of receiving combining marks (default 30%)
    pub mark_probability: f64,

    /// Upper bound on marks stacked on one grapheme (default 3)
    pub max_marks: usize,

    /// Chance that a pass-through word pulses (default 5%)
    pub pulse_probability: f64,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            flicker_cycles: 6,
            mutation_probability: 0.03,
            mark_probability: 0.3,
            max_marks: 3,
            pulse_probability: 0.05,
        }
    }
}

impl GlitchConfig {
    /// Clamps probabilities into [0, 1] and counts to at least 1.
    pub fn sanitized(mut self) -> Self {
        self.flicker_cycles = self.flicker_cycles.max(1);
        self.max_marks = self.max_marks.max(1);
        self.mutation_probability = clamp_probability(self.mutation_probability);
        self.mark_probability = clamp_probability(self.mark_probability);
        self.pulse_probability = clamp_probability(self.pulse_probability);
        self
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Per-frame delays for the reveal animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub word_delay_ms: u64,       // default 15
    pub pulse_delay_ms: u64,      // default 60
    pub flicker_delay_ms: u64,    // default 115
    pub mutation_delay_ms: u64,   // default 115
    pub line_break_delay_ms: u64, // default 120
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            word_delay_ms: 15,
            pulse_delay_ms: 60,
            flicker_delay_ms: 115,
            mutation_delay_ms: 115,
            line_break_delay_ms: 120,
        }
    }
}

impl RevealConfig {
    /// Every delay zeroed; used by `read --instant`.
    pub fn instant() -> Self {
        Self {
            word_delay_ms: 0,
            pulse_delay_ms: 0,
            flicker_delay_ms: 0,
            mutation_delay_ms: 0,
            line_break_delay_ms: 0,
        }
    }

    pub fn word_delay(&self) -> Duration {
        Duration::from_millis(self.word_delay_ms)
    }

    pub fn pulse_delay(&self) -> Duration {
        Duration::from_millis(self.pulse_delay_ms)
    }

    pub fn flicker_delay(&self) -> Duration {
        Duration::from_millis(self.flicker_delay_ms)
    }

    pub fn mutation_delay(&self) -> Duration {
        Duration::from_millis(self.mutation_delay_ms)
    }

    pub fn line_break_delay(&self) -> Duration {
        Duration::from_millis(self.line_break_delay_ms)
    }
}

/// Boot log pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    pub enabled: bool,
    pub min_delay_ms: u64, // default 200
    pub max_delay_ms: u64, // default 700
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_delay_ms: 200,
            max_delay_ms: 700,
        }
    }
}
