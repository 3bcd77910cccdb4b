//! Chronological visit log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded page visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub visited_at: DateTime<Utc>,
}

/// Append-only record of every visit, in visit order.
///
/// The same URL may appear any number of times; entries are never updated
/// in place, only appended or deleted.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a visit stamped with the current wall-clock time.
    pub fn append(&mut self, url: &str) {
        self.entries.push(HistoryEntry {
            url: url.to_string(),
            visited_at: Utc::now(),
        });
    }

    /// Position of the earliest entry for a URL, if any.
    pub fn find_first(&self, url: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.url == url)
    }

    /// Delete the earliest entry for a URL; returns whether one was found.
    pub fn delete_first(&mut self, url: &str) -> bool {
        match self.find_first(url) {
            Some(position) => {
                self.entries.remove(position);
                true
            }
            None => false,
        }
    }

    /// Delete every entry.
    pub fn delete_all(&mut self) {
        self.entries.clear();
    }

    /// Entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(log: &HistoryLog) -> Vec<&str> {
        log.iter().map(|entry| entry.url.as_str()).collect()
    }

    #[test]
    fn test_append_preserves_visit_order() {
        let mut log = HistoryLog::new();

        log.append("a.com");
        log.append("b.com");
        log.append("a.com"); // repeat visits are kept

        assert_eq!(urls(&log), vec!["a.com", "b.com", "a.com"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_timestamps_are_monotonic() {
        let mut log = HistoryLog::new();

        log.append("a.com");
        log.append("b.com");

        let entries: Vec<&HistoryEntry> = log.iter().collect();
        assert!(entries[0].visited_at <= entries[1].visited_at);
    }

    #[test]
    fn test_delete_first_removes_earliest_match() {
        let mut log = HistoryLog::new();

        log.append("a.com");
        log.append("b.com");
        log.append("a.com");

        assert_eq!(log.find_first("a.com"), Some(0));
        assert!(log.delete_first("a.com"));
        assert_eq!(urls(&log), vec!["b.com", "a.com"]);

        assert!(!log.delete_first("missing.com"));
    }

    #[test]
    fn test_delete_all() {
        let mut log = HistoryLog::new();

        log.append("a.com");
        log.append("b.com");
        log.delete_all();

        assert!(log.is_empty());
        assert_eq!(log.find_first("a.com"), None);
    }
}
