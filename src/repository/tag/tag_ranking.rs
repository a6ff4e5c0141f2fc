//! Tag Ranking Operations
//!
//! Tags ordered by the owner's most recent use. Tags never used come last;
//! ties break on key.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{DomainResult, TagDefinition, UserId};
use super::super::db_err;
use super::tag_repo::row_to_tag;

/// Trait for tag ranking operations
#[async_trait]
pub trait TagRankingOperations {
    /// All of the owner's tags, most recently used first
    async fn list_ranked_by_recency(&self, owner: UserId) -> DomainResult<Vec<TagDefinition>>;
}

#[async_trait]
impl TagRankingOperations for super::tag_repo::TagRepository {
    async fn list_ranked_by_recency(&self, owner: UserId) -> DomainResult<Vec<TagDefinition>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                "SELECT t.user_id, t.key, t.color, t.tag_type
                 FROM tag_definitions t
                 LEFT JOIN user_recent_tags r ON r.tag_key = t.key AND r.user_id = t.user_id
                 WHERE t.user_id = ?
                 ORDER BY (r.last_used_at IS NULL) ASC, r.last_used_at DESC, t.key ASC",
            )
            .map_err(db_err)?;

        let tags = stmt
            .query_map(params![owner], row_to_tag)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(tags)
    }
}
