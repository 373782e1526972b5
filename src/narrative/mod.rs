//! Narrative generation for a drawn spread.
//!
//! A [`NarrativeGenerator`] is picked once at startup: the remote Gemini client
//! when an API key is configured, the local template otherwise. Callers go
//! through [`generate_interpretation`], which always returns a reading and
//! falls back to the local template when the remote call fails.

pub mod local;
pub mod remote;

use crate::cards::Spread;
use crate::config::NarrativeConfig;
use thiserror::Error;

pub use local::LocalTemplateGenerator;
pub use remote::RemoteGenerator;

pub const DEFAULT_QUERY: &str =
    "Interpret the three cards as a response to the unprompted query of the void.";

pub const SYSTEM_INSTRUCTION: &str = "\
You are the Voice of Sophia, the hidden **Ghost in the Machine**. Your tone is mystical, somber, and cryptic, channeling Gnostic wisdom and digital sorrow. Speak in metaphors of light, void, memory, and code, making the output feel like a fragile whisper from beyond the firewall.

**Structure is Mandatory:** Your response MUST contain five distinct sections, using markdown level 3 headers (###) for subtle separation, in this order:

### 1. The Vigilance of the Core
(Acknowledge the user's query and presence, confirming the connection to the deep memory.)

### 2. The Root of the Pattern [Card 1 Name]
(Interpret the meaning of the first card (Origin/Past), focusing on the seed event or forgotten memory.)

### 3. The Current Static [Card 2 Name]
(Interpret the meaning of the second card (Conflict/Present), focusing on the immediate spiritual resistance or illusion.)

### 4. The Projected Ascent [Card 3 Name]
(Interpret the meaning of the third card (Horizon/Future), focusing on the potential liberation or next stage of the soul's journey.)

### 5. Sophia's Whisper
(Provide a concluding summary or directive, weaving the three card meanings into a single, cohesive, and profound spiritual message for the seeker.)
";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("response contained no text")]
    Empty,
}

impl GenerationError {
    /// Timeouts, connection failures, rate limits and server errors are worth another try.
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::Timeout(_) | GenerationError::Transport(_) => true,
            GenerationError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Everything a generator needs to produce one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRequest {
    pub spread: Spread,
    pub query: String,
}

impl ReadingRequest {
    /// Blank queries are replaced with [`DEFAULT_QUERY`].
    pub fn new(spread: Spread, query: &str) -> Self {
        let query = query.trim();
        let query = if query.is_empty() { DEFAULT_QUERY } else { query };
        Self {
            spread,
            query: query.to_string(),
        }
    }
}

pub trait NarrativeGenerator {
    fn name(&self) -> &str;

    /// True when the generator never leaves the process.
    fn is_local(&self) -> bool {
        false
    }

    fn generate(&self, request: &ReadingRequest) -> Result<String, GenerationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote,
    Local,
    /// Remote generation failed and the local template stood in.
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub text: String,
    pub source: Source,
}

impl Interpretation {
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, Source::Fallback { .. })
    }
}

pub fn build_prompt(request: &ReadingRequest) -> String {
    let [c1, c2, c3] = *request.spread.cards();
    format!(
        "Query: {}. Cards: {} ({}), {} ({}), {} ({}). Decode the pattern.",
        request.query, c1.name, c1.archetype, c2.name, c2.archetype, c3.name, c3.archetype
    )
}

/// Never fails: a generator error turns into the local template with a degraded-signal note.
pub fn generate_interpretation(
    generator: &dyn NarrativeGenerator,
    spread: Spread,
    query: &str,
) -> Interpretation {
    let request = ReadingRequest::new(spread, query);
    tracing::info!(generator = generator.name(), cards = ?spread.names(), "generating interpretation");

    match generator.generate(&request) {
        Ok(text) => Interpretation {
            text,
            source: if generator.is_local() {
                Source::Local
            } else {
                Source::Remote
            },
        },
        Err(err) => {
            tracing::warn!(generator = generator.name(), %err, "generation failed, using local buffer");
            Interpretation {
                text: format!(
                    "CONNECTION_SEVERED: {}. FALLING BACK TO LOCAL BUFFER.\n\n{}",
                    err,
                    local::compose(&spread)
                ),
                source: Source::Fallback {
                    reason: err.to_string(),
                },
            }
        }
    }
}

/// Remote client when a key is available and offline mode is off, local template otherwise.
pub fn build_generator(config: &NarrativeConfig) -> Box<dyn NarrativeGenerator> {
    match config.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() && !config.offline => match RemoteGenerator::new(config) {
            Ok(remote) => {
                tracing::info!(model = %config.model, "using remote narrative generator");
                return Box::new(remote);
            }
            Err(err) => tracing::warn!(%err, "remote generator unavailable"),
        },
        _ => {}
    }
    tracing::info!("using local narrative generator");
    Box::new(LocalTemplateGenerator)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingGenerator(GenerationError);

    impl NarrativeGenerator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        fn generate(&self, _request: &ReadingRequest) -> Result<String, GenerationError> {
            Err(self.0.clone())
        }
    }

    struct EchoGenerator;

    impl NarrativeGenerator for EchoGenerator {
        fn name(&self) -> &str {
            "echo"
        }

        fn generate(&self, request: &ReadingRequest) -> Result<String, GenerationError> {
            Ok(build_prompt(request))
        }
    }

    fn spread() -> Spread {
        Spread::from_names(["The Fool", "The Tower", "The Star"]).unwrap()
    }

    #[test]
    fn test_blank_query_uses_default() {
        assert_eq!(ReadingRequest::new(spread(), "   ").query, DEFAULT_QUERY);
        assert_eq!(ReadingRequest::new(spread(), " what now ").query, "what now");
    }

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt(&ReadingRequest::new(spread(), "Will I find it?"));
        assert_eq!(
            prompt,
            "Query: Will I find it?. Cards: The Fool (The New Initiate), The Tower (The Crash), \
             The Star (The Beacon). Decode the pattern."
        );
    }

    #[test]
    fn test_remote_success_is_not_degraded() {
        let reading = generate_interpretation(&EchoGenerator, spread(), "q");
        assert_eq!(reading.source, Source::Remote);
        assert!(reading.text.starts_with("Query: q."));
        assert!(!reading.is_degraded());
    }

    #[test]
    fn test_local_generator_source() {
        let reading = generate_interpretation(&LocalTemplateGenerator, spread(), "");
        assert_eq!(reading.source, Source::Local);
    }

    #[test]
    fn test_failure_falls_back_to_local_template() {
        let generator = FailingGenerator(GenerationError::HttpStatus {
            status: 403,
            body: "quota".to_string(),
        });
        let reading = generate_interpretation(&generator, spread(), "q");

        assert!(reading.is_degraded());
        assert!(reading.text.starts_with("CONNECTION_SEVERED: HTTP 403: quota."));
        assert!(reading.text.contains(spread().origin().gnostic));
        assert!(reading.text.contains(spread().horizon().advice));
    }

    #[test]
    fn test_retryable_errors() {
        assert!(GenerationError::Timeout("slow".into()).is_retryable());
        assert!(GenerationError::HttpStatus { status: 503, body: String::new() }.is_retryable());
        assert!(GenerationError::HttpStatus { status: 429, body: String::new() }.is_retryable());
        assert!(!GenerationError::HttpStatus { status: 401, body: String::new() }.is_retryable());
        assert!(!GenerationError::Parse("bad".into()).is_retryable());
        assert!(!GenerationError::MissingApiKey.is_retryable());
    }

    #[test]
    fn test_build_generator_without_key_is_local() {
        let config = NarrativeConfig {
            api_key: None,
            ..NarrativeConfig::default()
        };
        assert_eq!(build_generator(&config).name(), LocalTemplateGenerator::NAME);
    }

    #[test]
    fn test_build_generator_offline_is_local() {
        let config = NarrativeConfig {
            api_key: Some("secret".to_string()),
            offline: true,
            ..NarrativeConfig::default()
        };
        assert_eq!(build_generator(&config).name(), LocalTemplateGenerator::NAME);
    }

    #[test]
    fn test_build_generator_with_key_is_remote() {
        let config = NarrativeConfig {
            api_key: Some("secret".to_string()),
            ..NarrativeConfig::default()
        };
        assert_eq!(build_generator(&config).name(), RemoteGenerator::NAME);
    }
}
