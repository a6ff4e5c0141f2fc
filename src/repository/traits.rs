//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Every call is scoped to the owning user.

use async_trait::async_trait;
use crate::domain::{OwnedEntity, DomainResult, UserId};

/// Core repository trait for user-owned entities
///
/// Generic over any OwnedEntity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait OwnedRepository<T: OwnedEntity>: Send + Sync {
    /// Create a new entity for its owner
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find one of the owner's entities by ID
    async fn find_by_id(&self, owner: UserId, id: T::Id) -> DomainResult<Option<T>>;

    /// List all of the owner's entities
    async fn list(&self, owner: UserId) -> DomainResult<Vec<T>>;

    /// Delete one of the owner's entities
    ///
    /// Fails with `NotFound` when the owner has no such entity.
    async fn delete(&self, owner: UserId, id: T::Id) -> DomainResult<()>;
}
