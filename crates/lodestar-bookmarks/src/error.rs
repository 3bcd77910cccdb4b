//! Bookmark error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookmarkError {
    #[error("Bookmark index full: no free slot within {0} probe attempts")]
    IndexFull(usize),
}
