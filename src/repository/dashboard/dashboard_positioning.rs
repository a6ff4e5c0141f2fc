//! Dashboard Positioning Operations
//!
//! Moves a dashboard one step and keeps the owner's `order` values at
//! `0..count`. Every write happens inside one IMMEDIATE transaction, so
//! concurrent moves for the same owner are serialized and a failed write
//! leaves no row changed.

use async_trait::async_trait;
use log::debug;
use rusqlite::{params, Connection, TransactionBehavior};

use crate::domain::{swap_adjacent, DomainResult, MoveDirection, UserId};
use super::super::db_err;

/// Trait for dashboard positioning operations
#[async_trait]
pub trait DashboardPositioningOperations {
    /// Swap a dashboard with its neighbour and renumber all of the owner's dashboards
    ///
    /// Returns `Ok(false)` without writing when the dashboard isn't one of the
    /// owner's or is already first (up) / last (down).
    async fn move_adjacent(&self, owner: UserId, dashboard_id: u32, direction: MoveDirection) -> DomainResult<bool>;

    /// Renumber the owner's dashboards to be sequential (0, 1, 2, ...)
    async fn reindex_dashboards(&self, owner: UserId) -> DomainResult<()>;
}

#[async_trait]
impl DashboardPositioningOperations for super::dashboard_repo::DashboardRepository {
    async fn move_adjacent(&self, owner: UserId, dashboard_id: u32, direction: MoveDirection) -> DomainResult<bool> {
        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(db_err)?;

        let mut ids = load_ordered_ids(&tx, owner).map_err(db_err)?;

        let Some(current) = ids.iter().position(|&id| id == dashboard_id) else {
            debug!("Dashboard {} not found for user {}", dashboard_id, owner);
            return Ok(false);
        };

        if !swap_adjacent(&mut ids, current, direction) {
            debug!("Dashboard {} already at the {} edge", dashboard_id, direction.as_str());
            return Ok(false);
        }

        write_positions(&tx, owner, &ids).map_err(db_err)?;
        tx.commit().map_err(db_err)?;

        debug!("Moved dashboard {} {} for user {}", dashboard_id, direction.as_str(), owner);
        Ok(true)
    }

    async fn reindex_dashboards(&self, owner: UserId) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(db_err)?;

        let ids = load_ordered_ids(&tx, owner).map_err(db_err)?;
        write_positions(&tx, owner, &ids).map_err(db_err)?;
        tx.commit().map_err(db_err)
    }
}

/// Owner's dashboard ids by current position, id breaking ties
pub(super) fn load_ordered_ids(conn: &Connection, owner: UserId) -> rusqlite::Result<Vec<u32>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM dashboards WHERE user_id = ? ORDER BY \"order\" ASC, id ASC",
    )?;
    let ids = stmt
        .query_map(params![owner], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<u32>>>()?;
    Ok(ids)
}

/// Write `order = index` for every id
pub(super) fn write_positions(conn: &Connection, owner: UserId, ids: &[u32]) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare(
        "UPDATE dashboards SET \"order\" = ? WHERE id = ? AND user_id = ?",
    )?;
    for (position, id) in ids.iter().enumerate() {
        stmt.execute(params![position as i32, *id, owner])?;
    }
    Ok(())
}
