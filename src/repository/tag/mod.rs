//! Tag Repository Module
//!
//! - tag_repo: Core CRUD operations on tag definitions
//! - tag_ranking: Listing tags by most recent use
//! - recent_tag_repo: Recording tag usage per user

mod tag_repo;
mod tag_ranking;
mod recent_tag_repo;

pub use tag_repo::TagRepository;
pub use tag_ranking::TagRankingOperations;
pub use recent_tag_repo::RecentTagRepository;
