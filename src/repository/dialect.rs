//! SQL Dialects
//!
//! Backend families the recency upsert knows how to speak.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;
use super::upsert::{ConflictTargetUpsert, DuplicateKeyUpsert, RecencyUpsert, ReplaceUpsert};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Dialect {
    #[default]
    #[serde(rename = "sqlite3", alias = "sqlite")]
    Sqlite3,
    #[serde(rename = "mysql")]
    Mysql,
    #[serde(rename = "postgres", alias = "postgresql")]
    Postgres,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Sqlite3 => "sqlite3",
            Dialect::Mysql => "mysql",
            Dialect::Postgres => "postgres",
        }
    }

    /// The recency upsert statement for this backend
    pub fn upsert_strategy(self) -> Box<dyn RecencyUpsert> {
        match self {
            Dialect::Sqlite3 => Box::new(ReplaceUpsert),
            Dialect::Mysql => Box::new(DuplicateKeyUpsert),
            Dialect::Postgres => Box::new(ConflictTargetUpsert),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite3" | "sqlite" => Ok(Dialect::Sqlite3),
            "mysql" => Ok(Dialect::Mysql),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            other => Err(DomainError::InvalidInput(format!("Unknown dialect '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dialect_names() {
        assert_eq!("sqlite3".parse::<Dialect>().unwrap(), Dialect::Sqlite3);
        assert_eq!("SQLite".parse::<Dialect>().unwrap(), Dialect::Sqlite3);
        assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::Mysql);
        assert_eq!("postgresql".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert!(matches!("oracle".parse::<Dialect>(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_strategy_matches_dialect() {
        for dialect in [Dialect::Sqlite3, Dialect::Mysql, Dialect::Postgres] {
            assert_eq!(dialect.upsert_strategy().dialect(), dialect);
        }
    }

    #[test]
    fn test_serde_names() {
        let parsed: Dialect = serde_json::from_str("\"postgresql\"").unwrap();
        assert_eq!(parsed, Dialect::Postgres);
        assert_eq!(serde_json::to_string(&Dialect::Sqlite3).unwrap(), "\"sqlite3\"");
    }
}
