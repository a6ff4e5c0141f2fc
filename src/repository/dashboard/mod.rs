//! Dashboard Repository Module
//!
//! - dashboard_repo: Core CRUD operations
//! - dashboard_positioning: Manual ordering (move up/down, reindex)

mod dashboard_repo;
mod dashboard_positioning;

pub use dashboard_repo::DashboardRepository;
pub use dashboard_positioning::DashboardPositioningOperations;
