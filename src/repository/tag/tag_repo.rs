//! Tag Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for TagDefinition CRUD operations.
//! Ranking by recent use is in tag_ranking.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::domain::{DomainError, DomainResult, TagDefinition, TagType, UserId};
use super::super::db::SharedConnection;
use super::super::db_err;
use super::super::traits::OwnedRepository;

/// SQLite implementation of Tag repository
pub struct TagRepository {
    pub(super) conn: SharedConnection,
}

impl TagRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl OwnedRepository<TagDefinition> for TagRepository {
    async fn create(&self, entity: &TagDefinition) -> DomainResult<TagDefinition> {
        if entity.key.trim().is_empty() {
            return Err(DomainError::InvalidInput("Tag key must not be empty".to_string()));
        }

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO tag_definitions (user_id, key, color, tag_type) VALUES (?, ?, ?, ?)",
            params![entity.user_id, entity.key, entity.color, entity.tag_type.as_str()],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                DomainError::Conflict(format!("Tag {} already exists", entity.key))
            }
            other => db_err(other),
        })?;

        Ok(entity.clone())
    }

    async fn find_by_id(&self, owner: UserId, key: String) -> DomainResult<Option<TagDefinition>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT user_id, key, color, tag_type FROM tag_definitions WHERE user_id = ? AND key = ?",
            params![owner, key],
            row_to_tag,
        )
        .optional()
        .map_err(db_err)
    }

    /// The owner's tags by key
    async fn list(&self, owner: UserId) -> DomainResult<Vec<TagDefinition>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT user_id, key, color, tag_type FROM tag_definitions WHERE user_id = ? ORDER BY key")
            .map_err(db_err)?;

        let tags = stmt
            .query_map(params![owner], row_to_tag)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(tags)
    }

    /// Also forgets the owner's recent use of the key
    async fn delete(&self, owner: UserId, key: String) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(db_err)?;

        let deleted = tx
            .execute("DELETE FROM tag_definitions WHERE user_id = ? AND key = ?", params![owner, key])
            .map_err(db_err)?;
        if deleted == 0 {
            return Err(DomainError::NotFound(format!("Tag {} not found", key)));
        }

        tx.execute("DELETE FROM user_recent_tags WHERE user_id = ? AND tag_key = ?", params![owner, key])
            .map_err(db_err)?;
        tx.commit().map_err(db_err)
    }
}

/// Convert a database row to TagDefinition
pub(super) fn row_to_tag(row: &rusqlite::Row) -> rusqlite::Result<TagDefinition> {
    let tag_type: String = row.get(3)?;
    Ok(TagDefinition {
        user_id: row.get(0)?,
        key: row.get(1)?,
        color: row.get(2)?,
        tag_type: TagType::from_str(&tag_type),
    })
}
