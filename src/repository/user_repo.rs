//! User Repository
//!
//! Owners referenced by every other table. Deleting a user cascades to
//! their dashboards, tags and recency records.

use rusqlite::{params, OptionalExtension};

use crate::domain::{DomainError, DomainResult, User, UserId};
use super::db::SharedConnection;
use super::db_err;

pub struct UserRepository {
    conn: SharedConnection,
}

impl UserRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&self, name: &str) -> DomainResult<User> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("User name must not be empty".to_string()));
        }

        let conn = self.conn.lock().await;
        conn.execute("INSERT INTO users (name) VALUES (?)", params![name])
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    DomainError::Conflict(format!("User {} already exists", name))
                }
                other => db_err(other),
            })?;

        Ok(User::new(conn.last_insert_rowid() as UserId, name.to_string()))
    }

    pub async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let conn = self.conn.lock().await;
        conn.query_row("SELECT id, name FROM users WHERE id = ?", params![id], |row| {
            Ok(User::new(row.get(0)?, row.get(1)?))
        })
        .optional()
        .map_err(db_err)
    }

    pub async fn delete(&self, id: UserId) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let deleted = conn
            .execute("DELETE FROM users WHERE id = ?", params![id])
            .map_err(db_err)?;

        if deleted == 0 {
            return Err(DomainError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }
}
