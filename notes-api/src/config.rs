//! Service configuration.
//!
//! Loaded once at startup and handed to the router; nothing reads the
//! environment after that.
//!
//! ## Environment Variables
//! - `NOTES_BIND_ADDRESS`: listen address (default: "0.0.0.0")
//! - `NOTES_PORT` or `PORT`: listen port (default: 3000)
//! - `NOTES_API_KEY` or `API_KEY`: shared secret expected in `x-api-key`
//!   (unset or empty disables the check)
//! - `NOTES_MAX_BODY_BYTES`: request body limit (default: 1 MiB)
//! - `NOTES_METRICS_ENABLED`: install the Prometheus recorder (default: true)
//! - `NOTES_MAX_KEYWORDS`, `NOTES_MAX_SUMMARY_LINES`, `NOTES_MAX_KEY_POINTS`,
//!   `NOTES_MAX_DEFINITIONS`, `NOTES_MAX_CONCEPTS`, `NOTES_MAX_EXAM_NOTES`,
//!   `NOTES_MAX_QUESTIONS`: per-section caps

use lecture_notes::NotesLimits;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::str::FromStr;
use validator::Validate;

use crate::errors::{NotesApiError, NotesApiResult};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, PartialEq)]
pub struct Config {
    #[serde(default = "default_bind_address")]
    #[validate(length(min = 1, max = 255))]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    #[validate(nested)]
    pub auth: AuthConfig,

    #[serde(default)]
    #[validate(nested)]
    pub limits: LimitsConfig,

    #[serde(default)]
    #[validate(nested)]
    pub telemetry: TelemetryConfig
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    pub fn from_env() -> NotesApiResult<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("NOTES_BIND_ADDRESS") {
            config.bind_address = addr;
        }
        if let Some(port) = parse_env("NOTES_PORT")?.or(parse_env("PORT")?) {
            config.port = port;
        }
        if let Some(key) = env_non_empty("NOTES_API_KEY").or_else(|| env_non_empty("API_KEY")) {
            config.auth.api_key = Some(key);
        }
        if let Some(enabled) = parse_env("NOTES_METRICS_ENABLED")? {
            config.telemetry.metrics_enabled = enabled;
        }

        let limits = &mut config.limits;
        override_from_env(&mut limits.max_body_bytes, "NOTES_MAX_BODY_BYTES")?;
        override_from_env(&mut limits.max_keywords, "NOTES_MAX_KEYWORDS")?;
        override_from_env(&mut limits.max_summary_lines, "NOTES_MAX_SUMMARY_LINES")?;
        override_from_env(&mut limits.max_key_points, "NOTES_MAX_KEY_POINTS")?;
        override_from_env(&mut limits.max_definitions, "NOTES_MAX_DEFINITIONS")?;
        override_from_env(&mut limits.max_concepts, "NOTES_MAX_CONCEPTS")?;
        override_from_env(&mut limits.max_exam_notes, "NOTES_MAX_EXAM_NOTES")?;
        override_from_env(&mut limits.max_questions, "NOTES_MAX_QUESTIONS")?;

        config
            .validate()
            .map_err(|e| NotesApiError::Configuration(e.to_string()))?;

        Ok(config)
    }

    pub fn socket_addr(&self) -> NotesApiResult<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| NotesApiError::Configuration(format!("Invalid address: {e}")))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            auth: AuthConfig::default(),
            limits: LimitsConfig::default(),
            telemetry: TelemetryConfig::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, PartialEq)]
pub struct AuthConfig {
    /// Shared secret for the `x-api-key` header. `None` disables the check.
    #[serde(default)]
    pub api_key: Option<String>
}

impl AuthConfig {
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// Request size limit plus the per-section caps forwarded to the pipeline.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, PartialEq)]
pub struct LimitsConfig {
    #[serde(default = "default_max_body_bytes")]
    #[validate(range(min = 1))]
    pub max_body_bytes: usize,

    #[serde(default = "default_max_keywords")]
    #[validate(range(min = 1))]
    pub max_keywords: usize,

    #[serde(default = "default_max_summary_lines")]
    #[validate(range(min = 1))]
    pub max_summary_lines: usize,

    #[serde(default = "default_max_key_points")]
    #[validate(range(min = 1))]
    pub max_key_points: usize,

    #[serde(default = "default_max_definitions")]
    #[validate(range(min = 1))]
    pub max_definitions: usize,

    #[serde(default = "default_max_concepts")]
    #[validate(range(min = 1))]
    pub max_concepts: usize,

    #[serde(default = "default_max_exam_notes")]
    #[validate(range(min = 1))]
    pub max_exam_notes: usize,

    #[serde(default = "default_max_questions")]
    #[validate(range(min = 1))]
    pub max_questions: usize
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn default_max_keywords() -> usize {
    NotesLimits::default().max_keywords
}

fn default_max_summary_lines() -> usize {
    NotesLimits::default().max_summary_lines
}

fn default_max_key_points() -> usize {
    NotesLimits::default().max_key_points
}

fn default_max_definitions() -> usize {
    NotesLimits::default().max_definitions
}

fn default_max_concepts() -> usize {
    NotesLimits::default().max_concepts
}

fn default_max_exam_notes() -> usize {
    NotesLimits::default().max_exam_notes
}

fn default_max_questions() -> usize {
    NotesLimits::default().max_questions
}

impl LimitsConfig {
    pub fn notes_limits(&self) -> NotesLimits {
        NotesLimits {
            max_keywords: self.max_keywords,
            max_summary_lines: self.max_summary_lines,
            max_key_points: self.max_key_points,
            max_definitions: self.max_definitions,
            max_concepts: self.max_concepts,
            max_exam_notes: self.max_exam_notes,
            max_questions: self.max_questions
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            max_keywords: default_max_keywords(),
            max_summary_lines: default_max_summary_lines(),
            max_key_points: default_max_key_points(),
            max_definitions: default_max_definitions(),
            max_concepts: default_max_concepts(),
            max_exam_notes: default_max_exam_notes(),
            max_questions: default_max_questions()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, PartialEq)]
pub struct TelemetryConfig {
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool
}

fn default_metrics_enabled() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: default_metrics_enabled()
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parses `key` if set. A set but unparseable value is an error rather than
/// a silent fallback.
fn parse_env<T>(key: &str) -> NotesApiResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display
{
    match env_non_empty(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| NotesApiError::Configuration(format!("{key}={raw}: {e}"))),
        None => Ok(None)
    }
}

fn override_from_env<T>(target: &mut T, key: &str) -> NotesApiResult<()>
where
    T: FromStr,
    T::Err: std::fmt::Display
{
    if let Some(value) = parse_env(key)? {
        *target = value;
    }
    Ok(())
}
