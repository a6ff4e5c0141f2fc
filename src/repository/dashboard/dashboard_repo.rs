//! Dashboard Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Dashboard CRUD operations.
//! Ordering operations are in dashboard_positioning.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::domain::{Dashboard, DomainError, DomainResult, UserId};
use super::super::db::SharedConnection;
use super::super::db_err;
use super::super::traits::OwnedRepository;
use super::dashboard_positioning::{load_ordered_ids, write_positions};

/// SQLite implementation of Dashboard repository
pub struct DashboardRepository {
    pub(super) conn: SharedConnection,
}

impl DashboardRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl OwnedRepository<Dashboard> for DashboardRepository {
    /// New dashboards are appended after the owner's last one
    async fn create(&self, entity: &Dashboard) -> DomainResult<Dashboard> {
        if entity.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("Dashboard name must not be empty".to_string()));
        }

        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(db_err)?;

        let order = next_order(&tx, entity.user_id).map_err(db_err)?;
        tx.execute(
            "INSERT INTO dashboards (user_id, name, \"order\") VALUES (?, ?, ?)",
            params![entity.user_id, entity.name, order],
        )
        .map_err(db_err)?;
        let id = tx.last_insert_rowid() as u32;
        tx.commit().map_err(db_err)?;

        let mut dashboard = entity.clone();
        dashboard.id = id;
        dashboard.order = order;
        Ok(dashboard)
    }

    async fn find_by_id(&self, owner: UserId, id: u32) -> DomainResult<Option<Dashboard>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT id, user_id, name, \"order\" FROM dashboards WHERE id = ? AND user_id = ?",
            params![id, owner],
            row_to_dashboard,
        )
        .optional()
        .map_err(db_err)
    }

    /// The owner's dashboards in display order
    async fn list(&self, owner: UserId) -> DomainResult<Vec<Dashboard>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                "SELECT id, user_id, name, \"order\" FROM dashboards
                 WHERE user_id = ?
                 ORDER BY \"order\" ASC, id ASC",
            )
            .map_err(db_err)?;

        let dashboards = stmt
            .query_map(params![owner], row_to_dashboard)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(dashboards)
    }

    /// Remaining dashboards are renumbered in the same transaction
    async fn delete(&self, owner: UserId, id: u32) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(db_err)?;

        let deleted = tx
            .execute("DELETE FROM dashboards WHERE id = ? AND user_id = ?", params![id, owner])
            .map_err(db_err)?;
        if deleted == 0 {
            return Err(DomainError::NotFound(format!("Dashboard {} not found", id)));
        }

        let ids = load_ordered_ids(&tx, owner).map_err(db_err)?;
        write_positions(&tx, owner, &ids).map_err(db_err)?;
        tx.commit().map_err(db_err)?;
        Ok(())
    }
}

/// Position a new dashboard of `owner` would take
fn next_order(conn: &Connection, owner: UserId) -> rusqlite::Result<i32> {
    conn.query_row(
        "SELECT COALESCE(MAX(\"order\"), -1) + 1 FROM dashboards WHERE user_id = ?",
        params![owner],
        |row| row.get(0),
    )
}

/// Convert a database row to Dashboard
pub(super) fn row_to_dashboard(row: &rusqlite::Row) -> rusqlite::Result<Dashboard> {
    Ok(Dashboard {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        order: row.get(3)?,
    })
}
