//! File-based service discovery reference.
//!
//! The loader carries these values through untouched; resolving the files
//! into addresses is the job of the discovery mechanism that consumes them.
//! Decoding still enforces the reference's own shape: at least one file,
//! each a `.json`/`.yml`/`.yaml` path with at most one `*` in its last
//! segment, and a parseable refresh interval.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Default re-read interval for file-based discovery.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

// A glob is only allowed in the file name, not in directories.
static FILE_SD_PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^*]*(\*[^/]*)?\.(json|yml|yaml|JSON|YML|YAML)$")
        .expect("file SD path pattern is valid")
});

/// Why a discovery reference was rejected while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileSdError {
    #[error("file service discovery config must contain at least one path name")]
    NoFiles,

    #[error("path name {0:?} is not valid for file discovery")]
    InvalidPath(String),

    #[error("invalid refresh_interval {value:?}: {reason}")]
    InvalidInterval { value: String, reason: String },
}

/// A set of target files to be watched for endpoint addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "RawFileSdConfig")]
pub struct FileSdConfig {
    /// Path patterns of the target files.
    pub files: Vec<String>,

    /// How often the files are re-read.
    #[serde(serialize_with = "serialize_interval")]
    pub refresh_interval: Duration,
}

impl FileSdConfig {
    /// A reference re-read every [`DEFAULT_REFRESH_INTERVAL`].
    pub fn new(files: Vec<String>) -> Self {
        Self {
            files,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}

/// The reference exactly as written in the endpoint document.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawFileSdConfig {
    files: Vec<String>,
    refresh_interval: Option<String>,
}

impl TryFrom<RawFileSdConfig> for FileSdConfig {
    type Error = FileSdError;

    fn try_from(raw: RawFileSdConfig) -> Result<Self, Self::Error> {
        if raw.files.is_empty() {
            return Err(FileSdError::NoFiles);
        }
        if let Some(path) = raw.files.iter().find(|path| !FILE_SD_PATH_REGEX.is_match(path)) {
            return Err(FileSdError::InvalidPath(path.clone()));
        }

        let refresh_interval = match raw.refresh_interval {
            Some(value) => humantime::parse_duration(&value).map_err(|e| {
                FileSdError::InvalidInterval {
                    reason: e.to_string(),
                    value,
                }
            })?,
            None => DEFAULT_REFRESH_INTERVAL,
        };

        Ok(FileSdConfig {
            files: raw.files,
            refresh_interval,
        })
    }
}

fn serialize_interval<S: Serializer>(interval: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&humantime::format_duration(*interval))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(yaml: &str) -> Result<FileSdConfig, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    #[test]
    fn test_decode_with_interval() {
        let sd = decode("files: [\"/etc/sd/*.yml\"]\nrefresh_interval: 30s\n").unwrap();
        assert_eq!(
            sd,
            FileSdConfig::new(vec!["/etc/sd/*.yml".into()])
                .with_refresh_interval(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_missing_interval_defaults() {
        let sd = decode("files: [targets.json]\n").unwrap();
        assert_eq!(sd.refresh_interval, DEFAULT_REFRESH_INTERVAL);
    }

    #[test]
    fn test_files_required() {
        let err = decode("refresh_interval: 30s\n").unwrap_err();
        assert!(err.to_string().contains("at least one path name"));

        assert!(decode("files: []\n").is_err());
    }

    #[test]
    fn test_path_patterns() {
        for valid in ["a.yml", "/etc/sd/*.yaml", "/etc/sd/stores-*.JSON", "sd/targets.YML"] {
            assert!(FILE_SD_PATH_REGEX.is_match(valid), "{}", valid);
        }
        for invalid in ["a.txt", "/etc/*/targets.yml", "/etc/sd/*.yml.bak", "yml"] {
            assert!(!FILE_SD_PATH_REGEX.is_match(invalid), "{}", invalid);
        }
    }

    #[test]
    fn test_invalid_path_rejected() {
        let err = decode("files: [ok.yml, targets.txt]\n").unwrap_err();
        assert!(err.to_string().contains("targets.txt"));
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let err = decode("files: [ok.yml]\nrefresh_interval: banana\n").unwrap_err();
        assert!(err.to_string().contains("banana"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(decode("files: [ok.yml]\ninterval: 5m\n").is_err());
    }

    #[test]
    fn test_interval_serializes_as_duration_string() {
        let sd = FileSdConfig::new(vec!["ok.yml".into()]);
        let value = serde_json::to_value(&sd).unwrap();
        assert_eq!(value["refresh_interval"], "5m");
    }
}
