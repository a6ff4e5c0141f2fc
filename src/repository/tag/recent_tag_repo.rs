//! Recent Tag Repository
//!
//! Records when a user last attached a tag. The insert-or-update statement is
//! picked once from the configured dialect; recording is best effort and
//! never fails the caller.

use chrono::{DateTime, Utc};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{DomainError, DomainResult, UserId, UserRecentTag};
use super::super::db::SharedConnection;
use super::super::db_err;
use super::super::dialect::Dialect;
use super::super::upsert::RecencyUpsert;

pub struct RecentTagRepository {
    conn: SharedConnection,
    upsert: Box<dyn RecencyUpsert>,
}

impl RecentTagRepository {
    pub fn new(conn: SharedConnection, dialect: Dialect) -> Self {
        Self::with_strategy(conn, dialect.upsert_strategy())
    }

    pub fn with_strategy(conn: SharedConnection, upsert: Box<dyn RecencyUpsert>) -> Self {
        Self { conn, upsert }
    }

    pub fn dialect(&self) -> Dialect {
        self.upsert.dialect()
    }

    /// Set the owner's last use of `tag_key` to `at`, reporting failures
    pub async fn upsert(&self, owner: UserId, tag_key: &str, at: DateTime<Utc>) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        self.upsert_one(&conn, owner, tag_key, at)
    }

    /// Best-effort form of [`upsert`](Self::upsert); failures are logged
    pub async fn record_usage(&self, owner: UserId, tag_key: &str, at: DateTime<Utc>) {
        let conn = self.conn.lock().await;
        self.upsert_logged(&conn, owner, tag_key, at);
    }

    /// Record the same use time for every key, e.g. all tags of one time entry
    ///
    /// Each key is written on its own; one failure doesn't stop the rest.
    pub async fn record_usages<S>(&self, owner: UserId, tag_keys: &[S], at: DateTime<Utc>)
    where
        S: AsRef<str> + Sync,
    {
        let conn = self.conn.lock().await;
        for key in tag_keys {
            self.upsert_logged(&conn, owner, key.as_ref(), at);
        }
    }

    pub async fn find(&self, owner: UserId, tag_key: &str) -> DomainResult<Option<UserRecentTag>> {
        let conn = self.conn.lock().await;
        let millis: Option<i64> = conn
            .query_row(
                "SELECT last_used_at FROM user_recent_tags WHERE user_id = ? AND tag_key = ?",
                params![owner, tag_key],
                |row| row.get(0),
            )
            .optional()
            .map_err(db_err)?;

        match millis {
            Some(ms) => {
                let last_used_at = DateTime::from_timestamp_millis(ms).ok_or_else(|| {
                    DomainError::Internal(format!("Invalid last_used_at {} for tag {}", ms, tag_key))
                })?;
                Ok(Some(UserRecentTag {
                    user_id: owner,
                    tag_key: tag_key.to_string(),
                    last_used_at,
                }))
            }
            None => Ok(None),
        }
    }

    fn upsert_one(&self, conn: &Connection, owner: UserId, tag_key: &str, at: DateTime<Utc>) -> DomainResult<()> {
        self.upsert
            .upsert(conn, owner, tag_key, at)
            .map(|_| ())
            .map_err(db_err)
    }

    fn upsert_logged(&self, conn: &Connection, owner: UserId, tag_key: &str, at: DateTime<Utc>) {
        if let Err(e) = self.upsert_one(conn, owner, tag_key, at) {
            warn!(
                "Failed to record use of tag '{}' for user {} ({}): {}",
                tag_key,
                owner,
                self.upsert.dialect(),
                e
            );
        }
    }
}
