//! Open-addressing bookmark table

use tracing::debug;

use crate::error::BookmarkError;
use crate::Result;

/// Slot count used by [`BookmarkIndex::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// One slot of the backing array.
///
/// A removed entry becomes a tombstone rather than reverting to empty, so
/// lookups keep probing past it and colliding keys stay reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Empty,
    Tombstone,
    Occupied(String),
}

impl Slot {
    fn is_free(&self) -> bool {
        matches!(self, Slot::Empty | Slot::Tombstone)
    }
}

/// Fixed-capacity set of bookmarked URLs.
///
/// The table never resizes. Adding a URL that is already present stores a
/// second copy in another slot; each copy must be removed on its own.
pub struct BookmarkIndex {
    slots: Vec<Slot>,
    len: usize,
}

impl BookmarkIndex {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an index with a fixed number of slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "bookmark index capacity must be non-zero");

        Self {
            slots: vec![Slot::Empty; capacity],
            len: 0,
        }
    }

    /// Polynomial rolling hash, base 7, reduced modulo the slot count.
    fn home_slot(&self, url: &str) -> usize {
        url.bytes()
            .fold(0, |hash, byte| (hash * 7 + byte as usize) % self.slots.len())
    }

    /// Slot probed on the `attempt`-th try; attempt 0 is the home slot.
    fn probe(&self, home: usize, attempt: usize) -> usize {
        (home + attempt * attempt) % self.slots.len()
    }

    /// Add a URL to the index.
    ///
    /// Fails with [`BookmarkError::IndexFull`] when no free slot is found
    /// within one probe attempt per slot; the table is left unchanged.
    pub fn add(&mut self, url: &str) -> Result<()> {
        let home = self.home_slot(url);

        for attempt in 0..self.slots.len() {
            let slot = self.probe(home, attempt);
            if self.slots[slot].is_free() {
                self.slots[slot] = Slot::Occupied(url.to_string());
                self.len += 1;
                debug!(url, slot, "bookmarked");
                return Ok(());
            }
        }

        Err(BookmarkError::IndexFull(self.slots.len()))
    }

    /// Whether the URL is currently bookmarked.
    pub fn contains(&self, url: &str) -> bool {
        let home = self.home_slot(url);

        for attempt in 0..self.slots.len() {
            match &self.slots[self.probe(home, attempt)] {
                Slot::Occupied(stored) if stored == url => return true,
                Slot::Occupied(_) | Slot::Tombstone => continue,
                Slot::Empty => return false,
            }
        }

        false
    }

    /// Remove the first stored copy of a URL; returns whether one was found.
    ///
    /// The slot is tombstoned, not cleared, so other keys sharing part of
    /// the probe sequence stay reachable. Removing an absent URL is a no-op.
    pub fn remove(&mut self, url: &str) -> bool {
        let home = self.home_slot(url);

        for attempt in 0..self.slots.len() {
            let slot = self.probe(home, attempt);
            match &self.slots[slot] {
                Slot::Occupied(stored) if stored == url => {
                    self.slots[slot] = Slot::Tombstone;
                    self.len -= 1;
                    debug!(url, slot, "removed bookmark");
                    return true;
                }
                Slot::Occupied(_) | Slot::Tombstone => continue,
                Slot::Empty => return false,
            }
        }

        false
    }

    /// Occupied URLs in slot-index order (not insertion order).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(url) => Some(url.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl Default for BookmarkIndex {
    fn default() -> Self {
        Self::new()
    }
}
