//! Lodestar Bookmark Index
//!
//! A fixed-capacity open-addressing set of bookmarked URLs. Collisions
//! are resolved with quadratic probing, and removals leave tombstones so
//! probe chains stay intact after deletions. The table never resizes.

mod error;
mod index;

pub use error::BookmarkError;
pub use index::{BookmarkIndex, DEFAULT_CAPACITY};

pub type Result<T> = std::result::Result<T, BookmarkError>;
