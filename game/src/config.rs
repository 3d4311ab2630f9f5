use std::{path::Path, path::PathBuf, time::Duration};

use serde::Deserialize;

use crate::QuizError;

const DEFAULT_FEEDBACK_DELAY_MS: u64 = 1000;

/// Optional YAML settings; command line flags take precedence.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub api_url: Option<String>,
    pub catalog_file: Option<PathBuf>,
    pub database: Option<String>,
    pub feedback_delay_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            catalog_file: None,
            database: None,
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
        }
    }
}

impl QuizConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, QuizError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, QuizError> {
        let contents = std::fs::read_to_string(path)?;
        log::info!("Loaded configuration from {}", path.display());
        Self::from_yaml_str(&contents)
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.feedback_delay(), Duration::from_secs(1));
        assert_eq!(config.api_url, None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = QuizConfig::from_yaml_str("database: /tmp/quiz.sqlite\n").unwrap();
        assert_eq!(config.database.as_deref(), Some("/tmp/quiz.sqlite"));
        assert_eq!(config.feedback_delay_ms, 1000);
    }

    #[test]
    fn test_full_yaml() {
        let config = QuizConfig::from_yaml_str(
            "api_url: http://localhost/top\ncatalog_file: movies.json\nfeedback_delay_ms: 250\n",
        )
        .unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://localhost/top"));
        assert_eq!(config.catalog_file, Some(PathBuf::from("movies.json")));
        assert_eq!(config.feedback_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(
            QuizConfig::from_yaml_str("feedback_delay_ms: soon"),
            Err(QuizError::Config(_))
        ));
    }
}
