//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Bookmark error: {0}")]
    Bookmark(#[from] lodestar_bookmarks::BookmarkError),
}
