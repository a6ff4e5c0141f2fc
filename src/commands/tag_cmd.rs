//! Commands for Tag operations
//!
//! Tag definitions plus usage recording for recency ranking.

use chrono::{DateTime, Utc};

use crate::domain::{CurrentUser, TagDefinition, TagType};
use crate::repository::tag::TagRankingOperations;
use crate::repository::OwnedRepository;
use crate::AppState;

/// Create a new tag
pub async fn create_tag(
    state: &AppState,
    user: CurrentUser,
    key: String,
    color: String,
    tag_type: Option<TagType>,
) -> Result<TagDefinition, String> {
    let tag = TagDefinition::new(user.id, key, color).with_type(tag_type.unwrap_or_default());
    state.tags.create(&tag).await.map_err(|e| e.to_string())
}

/// All of the user's tags, most recently used first
pub async fn tags(state: &AppState, user: CurrentUser) -> Result<Vec<TagDefinition>, String> {
    state
        .tags
        .list_ranked_by_recency(user.id)
        .await
        .map_err(|e| e.to_string())
}

/// Delete tag
pub async fn delete_tag(state: &AppState, user: CurrentUser, key: String) -> Result<(), String> {
    state.tags.delete(user.id, key).await.map_err(|e| e.to_string())
}

/// Mark tags as used, e.g. the tags of a time entry that was just saved
///
/// Best effort: the caller's own action has already succeeded and isn't
/// affected by bookkeeping failures.
pub async fn record_tag_usage(state: &AppState, user: CurrentUser, keys: Vec<String>, at: Option<DateTime<Utc>>) {
    let at = at.unwrap_or_else(Utc::now);
    state.recent_tags.record_usages(user.id, &keys, at).await;
}
