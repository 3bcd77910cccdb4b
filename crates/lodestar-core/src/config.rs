//! Browser configuration

use serde::{Deserialize, Serialize};

use lodestar_bookmarks::DEFAULT_CAPACITY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Homepage URL the session starts on
    pub homepage: String,
    /// Slot count for the bookmark index
    pub bookmark_capacity: usize,
}

impl Config {
    pub fn new(homepage: &str) -> Self {
        Self {
            homepage: homepage.to_string(),
            bookmark_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
