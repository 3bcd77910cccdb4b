//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Session error: {0}")]
    Session(#[from] lodestar_session::SessionError),

    #[error("Bookmark error: {0}")]
    Bookmark(#[from] lodestar_bookmarks::BookmarkError),
}
