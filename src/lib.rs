//! Tally Core
//!
//! Dashboard ordering and tag recency ranking.
//!
//! Layered architecture:
//! - domain: Core entities and ordering rules
//! - repository: SQLite data access, one repository per table family
//! - commands: Handlers for the presentation layer
//! - config: JSON configuration

use log::info;

pub mod config;
pub mod domain;
pub mod repository;
pub mod commands;

use config::Config;
use repository::{
    init_db, DashboardRepository, DbState, RecentTagRepository, TagRepository, UserRepository,
};

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub users: UserRepository,
    pub dashboards: DashboardRepository,
    pub tags: TagRepository,
    pub recent_tags: RecentTagRepository,
}

impl AppState {
    pub fn new(db_state: DbState) -> Self {
        let conn = db_state.connection();
        Self {
            users: UserRepository::new(conn.clone()),
            dashboards: DashboardRepository::new(conn.clone()),
            tags: TagRepository::new(conn.clone()),
            recent_tags: RecentTagRepository::new(conn, db_state.dialect()),
            db_state,
        }
    }
}

/// Start logging, open the database and build the repositories
///
/// A logger that can't be installed is reported and skipped.
pub async fn bootstrap(config: &Config) -> Result<AppState, String> {
    if let Err(e) = rolling_logger::init_logger(config.log.dir.clone(), &config.log.app_name) {
        eprintln!("[{}] Logger unavailable: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
    }

    let db_state = match init_db(&config.database).await {
        Ok(db_state) => db_state,
        Err(e) => {
            let _ = rolling_logger::error(&format!("DB init failed: {}", e));
            return Err(e);
        }
    };
    let _ = rolling_logger::info("DB init success");
    info!("{} ready, upsert dialect {}", config.log.app_name, db_state.dialect());

    Ok(AppState::new(db_state))
}
