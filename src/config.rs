//! Runtime configuration.
//!
//! `main` turns command-line arguments into a [`Config`]; the library never
//! reads the environment on its own.

use std::path::PathBuf;
use std::sync::Arc;

use clap::ValueEnum;

use crate::data::{FileSource, OpenTdbConfig, OpenTdbSource, QuestionSource};
use crate::error::SourceError;

/// Questions per session unless configured otherwise.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Where questions come from.
#[derive(Debug, Clone)]
pub enum SourceConfig {
    OpenTdb(OpenTdbConfig),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub question_count: usize,
    pub source: SourceConfig,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            source: SourceConfig::OpenTdb(OpenTdbConfig::default()),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Build the question source this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` for a zero question count or an unusable API URL.
    pub fn build_source(&self) -> Result<Arc<dyn QuestionSource>, SourceError> {
        if self.question_count == 0 {
            return Err(SourceError::InvalidCount);
        }

        let source: Arc<dyn QuestionSource> = match &self.source {
            SourceConfig::OpenTdb(config) => Arc::new(OpenTdbSource::new(config.clone())?),
            SourceConfig::File(path) => Arc::new(FileSource::new(path)),
        };
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.question_count, 10);
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.build_source().is_ok());
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = Config {
            question_count: 0,
            ..Config::default()
        };
        assert!(matches!(config.build_source(), Err(SourceError::InvalidCount)));
    }

    #[test]
    fn test_difficulty_strings() {
        assert_eq!(Difficulty::Easy.as_str(), "easy");
        assert_eq!(Difficulty::Hard.as_str(), "hard");
    }
}
