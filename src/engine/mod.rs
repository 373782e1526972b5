pub mod config;
pub mod error;
pub mod glitch;
pub mod playback;
pub mod reveal;
pub mod token;
pub mod vocabulary;

pub use config::{BootConfig, GlitchConfig, RevealConfig};
pub use error::{OracleError, Result};
pub use glitch::{classify, classify_all, GlitchDecision};
pub use playback::{play, Pace, Pacer, PlaybackOutcome, SleepPacer};
pub use reveal::{reveal, schedule, Accent, Frame, RevealFrames, CURSOR};
pub use token::{tokenize, Token, TokenKind};
pub use vocabulary::VocabularyTable;
