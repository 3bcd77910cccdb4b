//! Browsing session state

use tracing::{debug, info};

use lodestar_bookmarks::BookmarkIndex;
use lodestar_navigation::{HistoryEntry, HistoryLog, Move, NavigationCursor};

use crate::Result;

/// One browsing run: a navigation cursor, a visit log, and a bookmark index.
///
/// The three structures are independently mutable. Deleting a URL from the
/// log does not move the cursor or drop a bookmark for it, and removing a
/// bookmark leaves the log and cursor alone.
pub struct Session {
    cursor: NavigationCursor,
    log: HistoryLog,
    bookmarks: BookmarkIndex,
}

impl Session {
    /// Start a session on the given homepage with the default bookmark
    /// capacity.
    pub fn new(homepage: &str) -> Self {
        Self {
            cursor: NavigationCursor::new(homepage),
            log: HistoryLog::new(),
            bookmarks: BookmarkIndex::new(),
        }
    }

    pub fn with_bookmark_capacity(homepage: &str, capacity: usize) -> Self {
        Self {
            cursor: NavigationCursor::new(homepage),
            log: HistoryLog::new(),
            bookmarks: BookmarkIndex::with_capacity(capacity),
        }
    }

    /// URL of the page under the navigation cursor.
    pub fn current_url(&self) -> &str {
        self.cursor.current_url()
    }

    /// Navigate to a new page and record the visit in the log.
    ///
    /// Visiting never bookmarks; that is a separate caller-triggered action.
    pub fn visit_page(&mut self, url: &str) {
        self.cursor.visit(url);
        self.log.append(url);
        debug!(url, "visited page");
    }

    /// Move back up to `steps` pages; clamps at the homepage.
    pub fn back(&mut self, steps: i32) -> Move {
        self.cursor.back(steps)
    }

    /// Move forward up to `steps` pages; clamps at the last visited page.
    pub fn forward(&mut self, steps: i32) -> Move {
        self.cursor.forward(steps)
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor.can_go_forward()
    }

    /// Bookmark a URL, independent of the navigation state.
    pub fn add_bookmark(&mut self, url: &str) -> Result<()> {
        self.bookmarks.add(url)?;
        info!(url, "bookmarked page");
        Ok(())
    }

    /// Remove a bookmark. Removing a URL that was never bookmarked is a
    /// silent no-op.
    pub fn remove_bookmark(&mut self, url: &str) {
        self.bookmarks.remove(url);
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.contains(url)
    }

    /// Bookmarked URLs in index slot order.
    pub fn bookmarks_snapshot(&self) -> Vec<String> {
        self.bookmarks.iter().map(str::to_string).collect()
    }

    /// The visit log in chronological order.
    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.log.iter().cloned().collect()
    }

    /// Delete the earliest log entry for a URL; returns whether one was
    /// found. The cursor and bookmark index are untouched.
    pub fn delete_history_entry(&mut self, url: &str) -> bool {
        self.log.delete_first(url)
    }

    /// Clear the visit log. The cursor and bookmark index are untouched.
    pub fn delete_all_history(&mut self) {
        self.log.delete_all();
        info!("cleared history");
    }
}
