//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod dialect;
mod upsert;
mod user_repo;
pub mod dashboard;
pub mod tag;


use crate::domain::DomainError;

pub use traits::OwnedRepository;
pub use db::{init_db, DbState, SharedConnection};
pub use dialect::Dialect;
pub use upsert::{RecencyUpsert, ReplaceUpsert, DuplicateKeyUpsert, ConflictTargetUpsert};
pub use user_repo::UserRepository;
pub use dashboard::DashboardRepository;
pub use tag::{TagRepository, RecentTagRepository};

/// Storage failures surface as internal errors
pub(crate) fn db_err(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}
