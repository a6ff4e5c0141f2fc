//! User Entity
//!
//! Owners of dashboards, tags and recency records.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

pub type UserId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: String) -> Self {
        Self { id, name }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// The authenticated caller of a request
///
/// Resolved by the auth layer before any command runs; the core only reads
/// the id and never authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
}

impl CurrentUser {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}
