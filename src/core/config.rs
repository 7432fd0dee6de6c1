//! Configuration management for studymate.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, StudyError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Upper bound for `study.fallback_plan_days` (about ten years)
pub const MAX_FALLBACK_PLAN_DAYS: u32 = 3650;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub study: StudyConfig,
}

/// Ingestion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Words per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Words shared between consecutive chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Maximum document size in MB (larger files are rejected)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results for `search`
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Number of passages used to compose an answer
    #[serde(default = "default_answer_k")]
    pub answer_k: usize,

    /// Maximum results per query
    #[serde(default = "default_max_k")]
    pub max_k: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// What to do with chunks that do not divide evenly across plan days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Leftover chunks are not scheduled (fixed partition)
    #[default]
    Drop,
    /// Leftover chunks are appended to the final day
    LastDay,
}

impl std::str::FromStr for RemainderPolicy {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "last_day" | "last-day" => Ok(Self::LastDay),
            other => Err(StudyError::ConfigError(format!(
                "Unknown plan remainder policy '{other}' (expected drop or last_day)"
            ))),
        }
    }
}

/// Study tool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudyConfig {
    /// Default number of quiz questions
    #[serde(default = "default_quiz_questions")]
    pub quiz_questions: usize,

    #[serde(default = "default_min_quiz_questions")]
    pub min_quiz_questions: usize,

    #[serde(default = "default_max_quiz_questions")]
    pub max_quiz_questions: usize,

    /// Default summary detail level (short, medium, long)
    #[serde(default = "default_summary_detail")]
    pub summary_detail: String,

    /// Days until the exam when the exam date cannot be parsed
    #[serde(default = "default_fallback_plan_days")]
    pub fallback_plan_days: u32,

    /// Default study hours per day
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,

    #[serde(default)]
    pub plan_remainder: RemainderPolicy,
}

// Default value functions
fn default_chunk_size() -> usize {
    800
}

fn default_overlap() -> usize {
    200
}

fn default_max_file_size() -> usize {
    50
}

fn default_k() -> usize {
    5
}

fn default_answer_k() -> usize {
    3
}

fn default_max_k() -> usize {
    50
}

fn default_max_query_length() -> usize {
    500
}

fn default_quiz_questions() -> usize {
    8
}

fn default_min_quiz_questions() -> usize {
    3
}

fn default_max_quiz_questions() -> usize {
    20
}

fn default_summary_detail() -> String {
    "medium".to_string()
}

fn default_fallback_plan_days() -> u32 {
    7
}

fn default_hours_per_day() -> u32 {
    2
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            answer_k: default_answer_k(),
            max_k: default_max_k(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            quiz_questions: default_quiz_questions(),
            min_quiz_questions: default_min_quiz_questions(),
            max_quiz_questions: default_max_quiz_questions(),
            summary_detail: default_summary_detail(),
            fallback_plan_days: default_fallback_plan_days(),
            hours_per_day: default_hours_per_day(),
            plan_remainder: RemainderPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| StudyError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. STUDYMATE_CONFIG env var
    /// 2. XDG config file (~/.config/studymate/config.toml)
    /// 3. ./studymate.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("STUDYMATE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("studymate.toml").exists() {
                Self::from_file("studymate.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Ingest configuration
        if let Ok(chunk_size) = env::var("STUDYMATE_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.ingest.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("STUDYMATE_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.ingest.overlap = o;
            }
        }
        if let Ok(max_size) = env::var("STUDYMATE_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.ingest.max_file_size_mb = size;
            }
        }

        // Search configuration
        if let Ok(default_k) = env::var("STUDYMATE_DEFAULT_K") {
            if let Ok(k) = default_k.parse() {
                self.search.default_k = k;
            }
        }
        if let Ok(answer_k) = env::var("STUDYMATE_ANSWER_K") {
            if let Ok(k) = answer_k.parse() {
                self.search.answer_k = k;
            }
        }
        if let Ok(max_k) = env::var("STUDYMATE_MAX_K") {
            if let Ok(k) = max_k.parse() {
                self.search.max_k = k;
            }
        }
        if let Ok(max_query_len) = env::var("STUDYMATE_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        // Study configuration
        if let Ok(questions) = env::var("STUDYMATE_QUIZ_QUESTIONS") {
            if let Ok(n) = questions.parse() {
                self.study.quiz_questions = n;
            }
        }
        if let Ok(policy) = env::var("STUDYMATE_PLAN_REMAINDER") {
            match policy.parse() {
                Ok(p) => self.study.plan_remainder = p,
                Err(e) => tracing::warn!("Ignoring STUDYMATE_PLAN_REMAINDER: {}", e),
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate ingest config
        if self.ingest.chunk_size == 0 {
            return Err(StudyError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.ingest.overlap >= self.ingest.chunk_size {
            return Err(StudyError::ConfigError(
                "Overlap must be less than chunk size".to_string(),
            ));
        }

        if self.ingest.max_file_size_mb == 0 {
            return Err(StudyError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        // Validate search config
        if self.search.default_k == 0 || self.search.answer_k == 0 {
            return Err(StudyError::ConfigError(
                "Default k and answer k must be non-zero".to_string(),
            ));
        }

        if self.search.default_k > self.search.max_k || self.search.answer_k > self.search.max_k {
            return Err(StudyError::ConfigError(
                "Default k and answer k cannot exceed max k".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(StudyError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        // Validate study config
        let study = &self.study;
        if study.min_quiz_questions == 0 || study.min_quiz_questions > study.max_quiz_questions {
            return Err(StudyError::ConfigError(format!(
                "Quiz question bounds are invalid: min={}, max={}",
                study.min_quiz_questions, study.max_quiz_questions
            )));
        }

        if !(study.min_quiz_questions..=study.max_quiz_questions).contains(&study.quiz_questions) {
            return Err(StudyError::ConfigError(format!(
                "Quiz questions must be between {} and {}",
                study.min_quiz_questions, study.max_quiz_questions
            )));
        }

        if study.fallback_plan_days == 0 || study.fallback_plan_days > MAX_FALLBACK_PLAN_DAYS {
            return Err(StudyError::ConfigError(format!(
                "Fallback plan days must be between 1 and {MAX_FALLBACK_PLAN_DAYS}"
            )));
        }

        Ok(())
    }

    /// Clamp a requested question count into the configured bounds
    pub fn clamp_quiz_questions(&self, requested: usize) -> usize {
        requested.clamp(self.study.min_quiz_questions, self.study.max_quiz_questions)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Chunk size: {} words", self.ingest.chunk_size);
        tracing::debug!("  Overlap: {} words", self.ingest.overlap);
        tracing::debug!("  Max file size: {} MB", self.ingest.max_file_size_mb);
        tracing::debug!("  Default k: {}", self.search.default_k);
        tracing::debug!("  Answer k: {}", self.search.answer_k);
        tracing::debug!("  Max k: {}", self.search.max_k);
        tracing::debug!("  Max query length: {}", self.search.max_query_length);
        tracing::debug!("  Quiz questions: {}", self.study.quiz_questions);
        tracing::debug!("  Plan remainder: {:?}", self.study.plan_remainder);
    }
}
