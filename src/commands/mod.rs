//! Commands Layer
//!
//! Handlers the presentation layer calls with an already-resolved user.
//! Errors cross this boundary as strings.

mod dashboard_cmd;
mod tag_cmd;

pub use dashboard_cmd::*;
pub use tag_cmd::*;
