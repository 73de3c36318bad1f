//! PipelineConfig - serde-loadable pipeline settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ConfigError;

/// Which observer a configured pipeline logs through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObserverKind {
    #[default]
    Stdout,
    Tracing,
    None,
}

/// Missing fields fall back to the defaults: debug off, stdout observer,
/// `"[Task] "` prefix.
///
/// ```json
/// { "debug": true, "observer": "tracing" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub debug: bool,
    pub observer: ObserverKind,
    /// Line prefix for the stdout observer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl PipelineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_uses_defaults() {
        let c = PipelineConfig::from_json_str("{}").unwrap();
        assert_eq!(c, PipelineConfig::default());
        assert!(!c.debug);
        assert_eq!(c.observer, ObserverKind::Stdout);
    }

    #[test]
    fn observer_kinds_are_snake_case() {
        let c = PipelineConfig::from_json_str(r#"{"debug": true, "observer": "none"}"#).unwrap();
        assert!(c.debug);
        assert_eq!(c.observer, ObserverKind::None);

        let s = serde_json::to_string(&ObserverKind::Tracing).unwrap();
        assert_eq!(s, "\"tracing\"");
    }

    #[test]
    fn unknown_observer_is_parse_error() {
        let err = PipelineConfig::from_json_str(r#"{"observer": "syslog"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"debug": true, "prefix": "[demo] "}}"#).unwrap();
        let c = PipelineConfig::from_json_file(file.path()).unwrap();
        assert!(c.debug);
        assert_eq!(c.prefix.as_deref(), Some("[demo] "));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PipelineConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
