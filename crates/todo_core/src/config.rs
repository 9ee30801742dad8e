//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Normalize log level and log directory input.
//! - Resolve `TODO_LOG_LEVEL` / `TODO_LOG_DIR` into a `LogConfig`.
//!
//! # Invariants
//! - A resolved `log_dir` is always absolute.
//! - A blank or missing `TODO_LOG_DIR` disables file logging.

use crate::logging::default_log_level;
use std::error::Error;
use std::ffi::{OsStr, OsString};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TODO_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(dir) => {
                write!(f, "log_dir must be an absolute path, got `{dir}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Logging settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: &'static str,
    /// `None` leaves file logging off.
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    /// Reads `TODO_LOG_LEVEL` and `TODO_LOG_DIR` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Resolves settings through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    /// - `UnsupportedLevel` for an unknown level name.
    /// - `RelativeLogDir` for a non-absolute directory.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let level = match lookup(LOG_LEVEL_ENV) {
            Some(raw) if !is_blank(&raw) => match raw.to_str() {
                Some(text) => normalize_level(text)?,
                None => {
                    return Err(ConfigError::UnsupportedLevel(
                        raw.to_string_lossy().into_owned(),
                    ))
                }
            },
            _ => default_log_level(),
        };

        let log_dir = match lookup(LOG_DIR_ENV) {
            Some(raw) if !is_blank(&raw) => Some(normalize_log_dir(&raw)?),
            _ => None,
        };

        Ok(Self { level, log_dir })
    }
}

/// Maps a case-insensitive level name to its canonical form.
pub fn normalize_level(level: &str) -> Result<&'static str, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(ConfigError::UnsupportedLevel(other.to_string())),
    }
}

/// Requires an absolute directory. UTF-8 input is trimmed; other bytes are
/// kept exactly as given.
pub fn normalize_log_dir(log_dir: impl AsRef<OsStr>) -> Result<PathBuf, ConfigError> {
    let raw = log_dir.as_ref();
    let path = match raw.to_str() {
        Some(text) => PathBuf::from(text.trim()),
        None => PathBuf::from(raw),
    };
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyLogDir);
    }
    if !path.is_absolute() {
        return Err(ConfigError::RelativeLogDir(path.display().to_string()));
    }
    Ok(path)
}

fn is_blank(value: &OsStr) -> bool {
    value.to_str().is_some_and(|text| text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_level, normalize_log_dir, ConfigError, LogConfig, LOG_DIR_ENV, LOG_LEVEL_ENV,
    };
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup_os(pairs: Vec<(&str, OsString)>) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        lookup_os(
            pairs
                .iter()
                .map(|(k, v)| (*k, OsString::from(*v)))
                .collect(),
        )
    }

    #[test]
    fn normalize_level_accepts_aliases_and_case() {
        assert_eq!(normalize_level("INFO"), Ok("info"));
        assert_eq!(normalize_level(" warning "), Ok("warn"));
    }

    #[test]
    fn normalize_level_rejects_unknown() {
        assert_eq!(
            normalize_level("loud"),
            Err(ConfigError::UnsupportedLevel("loud".to_string()))
        );
    }

    #[test]
    fn normalize_log_dir_rejects_relative_path() {
        let err = normalize_log_dir("logs/dev").unwrap_err();
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = LogConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_log_dir_disables_file_logging() {
        let config = LogConfig::from_lookup(lookup_from(&[(LOG_DIR_ENV, "   ")])).unwrap();
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_are_normalized() {
        let dir = std::env::temp_dir();
        let dir_str = dir.to_str().unwrap();
        let config = LogConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_ENV, "Error"),
            (LOG_DIR_ENV, dir_str),
        ]))
        .unwrap();
        assert_eq!(config.level, "error");
        assert_eq!(config.log_dir.as_deref(), Some(dir.as_path()));
    }

    #[test]
    fn normalize_log_dir_trims_utf8_input() {
        let path = normalize_log_dir("  /var/log/todo  ").unwrap();
        assert_eq!(path.to_str(), Some("/var/log/todo"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_log_dir_is_kept_byte_for_byte() {
        use std::os::unix::ffi::OsStrExt;

        let raw = std::ffi::OsStr::from_bytes(b"/tmp/todo-\xfflogs");
        let config =
            LogConfig::from_lookup(lookup_os(vec![(LOG_DIR_ENV, raw.to_os_string())])).unwrap();
        assert_eq!(config.log_dir.as_deref().map(|p| p.as_os_str()), Some(raw));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_relative_log_dir_is_rejected() {
        use std::os::unix::ffi::OsStrExt;

        let raw = std::ffi::OsStr::from_bytes(b"logs-\xff");
        assert!(matches!(
            normalize_log_dir(raw),
            Err(ConfigError::RelativeLogDir(_))
        ));
    }
}
