//! Lodestar Navigation
//!
//! Back/forward movement over visited pages, plus the chronological visit
//! log backing the history view. The two are deliberately independent:
//! moving the cursor never touches the log, and deleting log entries never
//! moves the cursor.

mod cursor;
mod log;

pub use cursor::{Boundary, Move, NavigationCursor};
pub use log::{HistoryEntry, HistoryLog};
