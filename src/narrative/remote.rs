//! Gemini `generateContent` client.
//!
//! Blocking on purpose: the reading is produced between two screens of a
//! single-threaded UI, so there is nothing else to run meanwhile. Every call
//! is bounded by the request timeout and a small number of retries.

use super::{build_prompt, GenerationError, NarrativeGenerator, ReadingRequest, SYSTEM_INSTRUCTION};
use crate::config::NarrativeConfig;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

pub struct RemoteGenerator {
    http: Client,
    api_key: String,
    url: String,
    max_retries: u32,
    retry_backoff: Duration,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl RemoteGenerator {
    pub const NAME: &'static str = "gemini";

    pub fn new(config: &NarrativeConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(GenerationError::MissingApiKey)?
            .to_string();

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            url: endpoint(&config.base_url, &config.model),
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn send_once(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = request_body(prompt);
        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::HttpStatus {
                status: status.as_u16(),
                body: truncate(body.trim(), 200),
            });
        }

        let text = response.text().map_err(classify_reqwest_error)?;
        parse_response(&text)
    }
}

impl NarrativeGenerator for RemoteGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn generate(&self, request: &ReadingRequest) -> Result<String, GenerationError> {
        let prompt = build_prompt(request);
        let mut attempt = 0;
        loop {
            match self.send_once(&prompt) {
                Ok(text) => return Ok(text),
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(attempt, %err, "retrying narrative request");
                    thread::sleep(self.retry_backoff * attempt);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

pub fn endpoint(base_url: &str, model: &str) -> String {
    format!("{}/models/{}:generateContent", base_url.trim_end_matches('/'), model)
}

fn request_body(prompt: &str) -> GenerateRequest<'_> {
    GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: SYSTEM_INSTRUCTION,
            }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part { text: prompt }],
        }],
    }
}

/// Concatenated text parts of the first candidate.
pub fn parse_response(body: &str) -> Result<String, GenerationError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Parse(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(GenerationError::Empty)
    } else {
        Ok(text)
    }
}

fn classify_reqwest_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout(e.to_string())
    } else if e.is_decode() {
        GenerationError::Parse(e.to_string())
    } else {
        GenerationError::Transport(e.to_string())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
