//! Commands for Dashboard operations

use crate::domain::{CurrentUser, Dashboard, MoveDirection};
use crate::repository::dashboard::DashboardPositioningOperations;
use crate::repository::OwnedRepository;
use crate::AppState;

/// Create a dashboard at the end of the user's list
pub async fn create_dashboard(state: &AppState, user: CurrentUser, name: String) -> Result<Dashboard, String> {
    state
        .dashboards
        .create(&Dashboard::new(user.id, name))
        .await
        .map_err(|e| e.to_string())
}

/// List the user's dashboards in display order
pub async fn list_dashboards(state: &AppState, user: CurrentUser) -> Result<Vec<Dashboard>, String> {
    state.dashboards.list(user.id).await.map_err(|e| e.to_string())
}

/// Delete a dashboard
pub async fn delete_dashboard(state: &AppState, user: CurrentUser, id: u32) -> Result<(), String> {
    state.dashboards.delete(user.id, id).await.map_err(|e| e.to_string())
}

/// Move a dashboard one step up or down
///
/// `false` means nothing moved: unknown id or already at the edge.
pub async fn reorder_dashboard(state: &AppState, user: CurrentUser, id: u32, move_up: bool) -> Result<bool, String> {
    state
        .dashboards
        .move_adjacent(user.id, id, MoveDirection::from_move_up(move_up))
        .await
        .map_err(|e| e.to_string())
}
