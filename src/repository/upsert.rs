//! Recency Upsert Strategies
//!
//! One insert-or-update statement per backend family. All of them leave a
//! single `user_recent_tags` row per (user_id, tag_key) holding the latest
//! timestamp.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::domain::UserId;
use super::dialect::Dialect;

/// Insert-or-update of a user's last use of a tag
pub trait RecencyUpsert: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// SQL text binding `(user_id, tag_key, last_used_at)` in that order
    fn statement(&self) -> &'static str;

    fn upsert(
        &self,
        conn: &Connection,
        user_id: UserId,
        tag_key: &str,
        at: DateTime<Utc>,
    ) -> rusqlite::Result<usize> {
        conn.execute(self.statement(), params![user_id, tag_key, at.timestamp_millis()])
    }
}

/// `INSERT OR REPLACE`
pub struct ReplaceUpsert;

impl RecencyUpsert for ReplaceUpsert {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite3
    }

    fn statement(&self) -> &'static str {
        "INSERT OR REPLACE INTO user_recent_tags (user_id, tag_key, last_used_at) VALUES (?, ?, ?)"
    }
}

/// `ON DUPLICATE KEY UPDATE`
pub struct DuplicateKeyUpsert;

impl RecencyUpsert for DuplicateKeyUpsert {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    fn statement(&self) -> &'static str {
        "INSERT INTO user_recent_tags (user_id, tag_key, last_used_at) VALUES (?, ?, ?)
         ON DUPLICATE KEY UPDATE last_used_at = VALUES(last_used_at)"
    }
}

/// `ON CONFLICT (user_id, tag_key) DO UPDATE`
pub struct ConflictTargetUpsert;

impl RecencyUpsert for ConflictTargetUpsert {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn statement(&self) -> &'static str {
        "INSERT INTO user_recent_tags (user_id, tag_key, last_used_at) VALUES (?, ?, ?)
         ON CONFLICT (user_id, tag_key) DO UPDATE SET last_used_at = excluded.last_used_at"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn test_statements_bind_three_values() {
        let strategies: [&dyn RecencyUpsert; 3] = [&ReplaceUpsert, &DuplicateKeyUpsert, &ConflictTargetUpsert];
        for strategy in strategies {
            assert_eq!(placeholders(strategy.statement()), 3, "{}", strategy.dialect());
            assert!(strategy.statement().contains("user_recent_tags"));
        }
    }

    #[test]
    fn test_duplicate_key_updates_timestamp_only() {
        let sql = DuplicateKeyUpsert.statement();
        assert!(sql.contains("ON DUPLICATE KEY UPDATE last_used_at = VALUES(last_used_at)"));
        assert!(!sql.contains("OR REPLACE"));
    }

    #[test]
    fn test_conflict_target_names_primary_key() {
        let sql = ConflictTargetUpsert.statement();
        assert!(sql.contains("ON CONFLICT (user_id, tag_key)"));
    }
}
