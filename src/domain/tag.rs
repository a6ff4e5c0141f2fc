//! Tag Definition Entity
//!
//! Tags are identified by a key unique per user. They carry no position of
//! their own; listing ranks them by most recent use.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, OwnedEntity};
use super::user::UserId;

/// Kind of value a tag carries when attached to a time entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    /// Tag alone, no value
    #[default]
    NoValue,
    /// Tag with a single string value
    SingleValue,
}

impl TagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::NoValue => "novalue",
            TagType::SingleValue => "singlevalue",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "singlevalue" => TagType::SingleValue,
            _ => TagType::NoValue,
        }
    }
}

/// A user's tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagDefinition {
    /// Owning user
    pub user_id: UserId,
    /// Key, unique per owner
    pub key: String,
    /// Color (hex, e.g., "#FF5733")
    pub color: String,
    pub tag_type: TagType,
}

impl TagDefinition {
    pub fn new(user_id: UserId, key: String, color: String) -> Self {
        Self {
            user_id,
            key,
            color,
            tag_type: TagType::NoValue,
        }
    }

    pub fn with_type(mut self, tag_type: TagType) -> Self {
        self.tag_type = tag_type;
        self
    }
}

impl Entity for TagDefinition {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.key.clone()
    }
}

impl OwnedEntity for TagDefinition {
    fn owner(&self) -> UserId {
        self.user_id
    }
}
