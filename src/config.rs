//! Configuration
//!
//! Loaded from a JSON file; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::repository::Dialect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, or `:memory:`
    pub path: PathBuf,
    /// Backend family the upsert statement is written for
    pub dialect: Dialect,
    /// How long a writer waits on a locked database
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("tally.db"),
            dialect: Dialect::Sqlite3,
            busy_timeout_ms: 5000,
        }
    }
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(":memory:"),
            ..Self::default()
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub app_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            app_name: "Tally".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| format!("Invalid config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database.path, PathBuf::from("tally.db"));
        assert_eq!(config.database.dialect, Dialect::Sqlite3);
        assert_eq!(config.log.app_name, "Tally");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "database": { "dialect": "mysql" } }"#).unwrap();
        assert_eq!(config.database.dialect, Dialect::Mysql);
        assert_eq!(config.database.busy_timeout_ms, 5000);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_unknown_dialect_rejected() {
        let err = Config::from_json(r#"{ "database": { "dialect": "oracle" } }"#).unwrap_err();
        assert!(err.starts_with("Invalid config"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "database": {{ "path": "/tmp/x.db", "dialect": "postgres" }}, "log": {{ "app_name": "Test" }} }}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.database.path, PathBuf::from("/tmp/x.db"));
        assert_eq!(config.database.dialect, Dialect::Postgres);
        assert_eq!(config.log.app_name, "Test");
        assert_eq!(config.log.dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load(Path::new("/nonexistent/tally.json")).is_err());
    }
}
