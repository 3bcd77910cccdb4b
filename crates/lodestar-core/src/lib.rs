//! Lodestar Core
//!
//! Central entry point for the Lodestar browsing-session crates: the
//! presentation layer depends on this crate alone and drives the session
//! through plain method calls.

mod config;
mod error;

pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use lodestar_bookmarks::{BookmarkError, BookmarkIndex, DEFAULT_CAPACITY};
pub use lodestar_navigation::{Boundary, HistoryEntry, HistoryLog, Move, NavigationCursor};
pub use lodestar_session::{Session, SessionError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
