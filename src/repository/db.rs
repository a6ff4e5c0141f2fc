//! Database Connection and Setup
//!
//! Opens the SQLite connection and creates the tables this crate uses.

use log::info;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::DatabaseConfig;
use super::dialect::Dialect;

/// Connection shared by all repositories
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    conn: SharedConnection,
    dialect: Dialect,
    path: PathBuf,
}

impl DbState {
    pub fn connection(&self) -> SharedConnection {
        self.conn.clone()
    }

    /// Backend family the SQL is written for
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open the configured database and create missing tables
pub async fn init_db(config: &DatabaseConfig) -> Result<DbState, String> {
    let conn = Connection::open(&config.path)
        .map_err(|e| format!("Failed to open db {}: {}", config.path.display(), e))?;

    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(|e| format!("Failed to set busy timeout: {}", e))?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| format!("Failed to enable foreign keys: {}", e))?;

    create_schema(&conn)?;

    check_upsert_dialect(&conn, config.dialect)?;

    info!("Database opened at {} ({})", config.path.display(), config.dialect);

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
        dialect: config.dialect,
        path: config.path.clone(),
    })
}

/// The configured upsert statement must parse on the opened connection
fn check_upsert_dialect(conn: &Connection, dialect: Dialect) -> Result<(), String> {
    let strategy = dialect.upsert_strategy();
    conn.prepare(strategy.statement())
        .map(|_| ())
        .map_err(|e| format!("Dialect {} is not supported by this database: {}", dialect, e))
}

/// Create tables and indexes if they don't exist
fn create_schema(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS dashboards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            \"order\" INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_dashboards_user_order ON dashboards(user_id, \"order\");

        CREATE TABLE IF NOT EXISTS tag_definitions (
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            key TEXT NOT NULL,
            color TEXT NOT NULL DEFAULT '',
            tag_type TEXT NOT NULL DEFAULT 'novalue',
            PRIMARY KEY (user_id, key)
        );

        CREATE TABLE IF NOT EXISTS user_recent_tags (
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            tag_key TEXT NOT NULL,
            last_used_at INTEGER NOT NULL,
            PRIMARY KEY (user_id, tag_key)
        );
        CREATE INDEX IF NOT EXISTS idx_user_last_used ON user_recent_tags(user_id, last_used_at);",
    )
    .map_err(|e| format!("Failed to create schema: {}", e))
}
