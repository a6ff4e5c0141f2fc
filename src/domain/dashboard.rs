//! Dashboard Entity
//!
//! Dashboards are kept in an explicit, user-controlled order.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, OwnedEntity};
use super::user::UserId;

/// A user's dashboard
///
/// For a fixed owner the `order` values always form `0..count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Unique identifier
    pub id: u32,
    /// Owning user
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Position among the owner's dashboards
    pub order: i32,
}

impl Dashboard {
    /// A dashboard not yet persisted; id and order are assigned on create
    pub fn new(user_id: UserId, name: String) -> Self {
        Self {
            id: 0,
            user_id,
            name,
            order: 0,
        }
    }
}

impl Entity for Dashboard {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl OwnedEntity for Dashboard {
    fn owner(&self) -> UserId {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_creation() {
        let dashboard = Dashboard::new(7, "Weekly".to_string());
        assert_eq!(dashboard.id(), 0);
        assert_eq!(dashboard.owner(), 7);
        assert_eq!(dashboard.order, 0);
    }
}
