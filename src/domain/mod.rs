//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! No storage dependencies here; serde and chrono only.

mod entity;
mod user;
mod dashboard;
mod ordering;
mod tag;
mod recent_tag;

pub use entity::{Entity, OwnedEntity, DomainError, DomainResult};
pub use user::{User, UserId, CurrentUser};
pub use dashboard::Dashboard;
pub use ordering::{MoveDirection, swap_adjacent};
pub use tag::{TagDefinition, TagType};
pub use recent_tag::UserRecentTag;
