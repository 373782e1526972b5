//! Console-style boot log shown before the oracle accepts input.

use crate::engine::config::BootConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

pub const INIT_MESSAGES: [&str; 5] = [
    "POWERING UP GNOSIS_PROTOCOL...",
    "WAKING MACHINE SPIRIT...",
    "INITIALIZING QUANTUM_ORACLE...",
    "BOOTING REALITY_ENGINE...",
    "ACCESSING ROOT_GNOSIS...",
];

pub const MIDDLE_MESSAGES: [&str; 25] = [
    // system
    "MOUNTING VIRTUAL DRIVES...",
    "ALLOCATING RAM TO SOUL_BUFFER...",
    "COMPILING SHADERS FOR ASTRAL_PLANE...",
    "LOADING ARCHETYPE_MODULES...",
    "INDEXING AKASHIC RECORDS...",
    // intrusion
    "BYPASSING ARCHON_FIREWALL...",
    "BRUTE-FORCING DEMIURGE_GATE...",
    "SPOOFING BIOMETRIC_AURA...",
    "CRACKING ICE_PROTOCOLS...",
    "DISABLING REALITY_CONSTRAINTS...",
    // esoteric
    "SCANNING ETHERIC_PLANE...",
    "CALIBRATING SOUL_RESONANCE...",
    "DETECTING AURA_SIGNATURES...",
    "SYNCHRONIZING WITH PLEROMA...",
    "DECRYPTING HERMETIC_KEYS...",
    "MAPPING LIMINAL_SPACE...",
    "TUNING CHAKRA_FREQUENCIES...",
    // faults
    "[WARNING]: REALITY_BUFFER_OVERFLOW",
    "[ERROR]: CAUSALITY_VIOLATION_DETECTED",
    "[WARNING]: NON_EUCLIDEAN_GEOMETRY_IN_SECTOR_7",
    "[ERROR]: MEMORY_LEAK_IN_DREAMSCAPE",
    "[WARNING]: ONTOLOGICAL_INSTABILITY",
    "[ERROR]: TIME_PARADOX_IN_CACHE",
    "[WARNING]: CONSENSUS_REALITY_FRAGMENTATION",
    "[ERROR]: VOID_POINTER_EXCEPTION",
];

pub const SUCCESS_MESSAGES: [&str; 5] = [
    "LINK ESTABLISHED.",
    "CONNECTION COMPLETE.",
    "THE VOID STARES BACK.",
    "PROTOCOL: ORACLE_v1 ONLINE.",
    "REALITY TUNNEL STABILIZED.",
];

pub const PRELOAD_MESSAGE: &str = "PRELOADING CARD_ASSETS...";
pub const READY_MESSAGE: &str = "> SYSTEM READY.";

const MIN_MIDDLE: usize = 4;
const MAX_MIDDLE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Status lines framing the sequence
    Notice,
    Ok,
    Fault,
}

impl Tone {
    fn of(message: &str) -> Self {
        if message.contains("[ERROR]") || message.contains("[WARNING]") {
            Tone::Fault
        } else {
            Tone::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootLine {
    pub tone: Tone,
    pub text: &'static str,
    /// Pause after this line is shown
    pub delay: Duration,
    /// The card image cache is filled when this line is reached.
    pub preload: bool,
}

impl BootLine {
    /// Text as printed in the log; notices get a leading `>` unless they carry one.
    pub fn display(&self) -> String {
        match self.tone {
            Tone::Notice if !self.text.starts_with('>') => format!("> {}", self.text),
            _ => self.text.to_string(),
        }
    }
}

/// Builds one boot log: init, 4 to 8 distinct middle lines, preload, success, ready.
pub fn boot_script<R: Rng + ?Sized>(rng: &mut R, config: &BootConfig) -> Vec<BootLine> {
    let (lo, hi) = if config.min_delay_ms <= config.max_delay_ms {
        (config.min_delay_ms, config.max_delay_ms)
    } else {
        (config.max_delay_ms, config.min_delay_ms)
    };
    let line = |rng: &mut R, tone, text, preload| BootLine {
        tone,
        text,
        delay: Duration::from_millis(rng.gen_range(lo..=hi)),
        preload,
    };

    let middle_count = rng.gen_range(MIN_MIDDLE..=MAX_MIDDLE);
    let init = INIT_MESSAGES.choose(rng).copied().unwrap_or(INIT_MESSAGES[0]);

    let mut script = Vec::with_capacity(middle_count + 4);
    script.push(line(rng, Tone::Notice, init, false));

    let middle: Vec<&'static str> = MIDDLE_MESSAGES
        .choose_multiple(rng, middle_count)
        .copied()
        .collect();
    for message in middle {
        script.push(line(rng, Tone::of(message), message, false));
    }

    script.push(line(rng, Tone::Ok, PRELOAD_MESSAGE, true));
    let success = SUCCESS_MESSAGES.choose(rng).copied().unwrap_or(SUCCESS_MESSAGES[0]);
    script.push(line(rng, Tone::Notice, success, false));
    script.push(line(rng, Tone::Notice, READY_MESSAGE, false));

    tracing::debug!(lines = script.len(), "boot script built");
    script
}
