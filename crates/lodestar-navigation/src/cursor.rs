//! Back/forward navigation cursor
//!
//! Visited pages form a doubly-linked chain. Nodes live in an arena and
//! link to each other by index; slots freed by branch replacement go on a
//! free list and are recycled by later visits.

use tracing::debug;

#[derive(Debug, Clone)]
struct PageNode {
    url: String,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Edge of the chain that stopped a back or forward move early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// No earlier page; the cursor sits on the homepage.
    Homepage,
    /// No later page; the cursor sits on the last page visited.
    LastPage,
}

/// Outcome of a back or forward move.
///
/// Hitting an edge is not an error: the move clamps and reports how far it
/// actually got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// URL under the cursor after the move.
    pub url: String,
    /// Steps actually taken, at most the number requested.
    pub taken: usize,
    /// Set when the move stopped early at an edge of the chain.
    pub boundary: Option<Boundary>,
}

/// Movable position over the chain of visited pages.
///
/// The root node holds the homepage and lives as long as the cursor.
/// Visiting a page from anywhere but the end of the chain discards the
/// pages that lay ahead (branch replacement).
pub struct NavigationCursor {
    nodes: Vec<PageNode>,
    free: Vec<usize>,
    current: usize,
}

impl NavigationCursor {
    /// Create a cursor positioned on the homepage.
    pub fn new(homepage: &str) -> Self {
        let root = PageNode {
            url: homepage.to_string(),
            prev: None,
            next: None,
        };

        Self {
            nodes: vec![root],
            free: Vec::new(),
            current: 0,
        }
    }

    /// URL of the page under the cursor.
    pub fn current_url(&self) -> &str {
        &self.nodes[self.current].url
    }

    pub fn can_go_back(&self) -> bool {
        self.nodes[self.current].prev.is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.nodes[self.current].next.is_some()
    }

    fn alloc(&mut self, node: PageNode) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Unlink the chain starting at `start` and reclaim its slots.
    fn release_chain(&mut self, start: Option<usize>) -> usize {
        let mut released = 0;
        let mut walk = start;

        while let Some(index) = walk {
            walk = self.nodes[index].next.take();
            self.nodes[index].prev = None;
            self.nodes[index].url.clear();
            self.free.push(index);
            released += 1;
        }

        released
    }

    /// Move to a newly visited page.
    ///
    /// Any pages ahead of the cursor are discarded; the new page becomes
    /// the sole successor of the old current page.
    pub fn visit(&mut self, url: &str) {
        let forward = self.nodes[self.current].next.take();
        let released = self.release_chain(forward);
        if released > 0 {
            debug!(released, url, "discarded forward branch");
        }

        let node = self.alloc(PageNode {
            url: url.to_string(),
            prev: Some(self.current),
            next: None,
        });
        self.nodes[self.current].next = Some(node);
        self.current = node;
    }

    /// Move up to `steps` pages toward the homepage.
    ///
    /// Zero or negative `steps` is a no-op reporting the current URL.
    pub fn back(&mut self, steps: i32) -> Move {
        let requested = steps.max(0) as usize;
        let mut taken = 0;
        let mut boundary = None;

        while taken < requested {
            match self.nodes[self.current].prev {
                Some(prev) => {
                    self.current = prev;
                    taken += 1;
                }
                None => {
                    boundary = Some(Boundary::Homepage);
                    break;
                }
            }
        }

        Move {
            url: self.current_url().to_string(),
            taken,
            boundary,
        }
    }

    /// Move up to `steps` pages toward the most recent page.
    ///
    /// Zero or negative `steps` is a no-op reporting the current URL.
    pub fn forward(&mut self, steps: i32) -> Move {
        let requested = steps.max(0) as usize;
        let mut taken = 0;
        let mut boundary = None;

        while taken < requested {
            match self.nodes[self.current].next {
                Some(next) => {
                    self.current = next;
                    taken += 1;
                }
                None => {
                    boundary = Some(Boundary::LastPage);
                    break;
                }
            }
        }

        Move {
            url: self.current_url().to_string(),
            taken,
            boundary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_homepage() {
        let cursor = NavigationCursor::new("home.com");

        assert_eq!(cursor.current_url(), "home.com");
        assert!(!cursor.can_go_back());
        assert!(!cursor.can_go_forward());
    }

    #[test]
    fn test_back_then_forward_round_trips() {
        let mut cursor = NavigationCursor::new("home.com");
        cursor.visit("a.com");
        cursor.visit("b.com");
        cursor.visit("c.com");

        let before = cursor.current_url().to_string();
        let back = cursor.back(2);
        assert_eq!(back.url, "a.com");
        assert_eq!(back.taken, 2);
        assert_eq!(back.boundary, None);

        let forward = cursor.forward(2);
        assert_eq!(forward.url, before);
        assert_eq!(forward.taken, 2);
        assert_eq!(forward.boundary, None);
    }

    #[test]
    fn test_back_clamps_at_homepage() {
        let mut cursor = NavigationCursor::new("home.com");
        cursor.visit("a.com");

        let outcome = cursor.back(5);
        assert_eq!(outcome.url, "home.com");
        assert_eq!(outcome.taken, 1);
        assert_eq!(outcome.boundary, Some(Boundary::Homepage));

        // Already at the edge: no movement, boundary still reported.
        let outcome = cursor.back(1);
        assert_eq!(outcome.url, "home.com");
        assert_eq!(outcome.taken, 0);
        assert_eq!(outcome.boundary, Some(Boundary::Homepage));
    }

    #[test]
    fn test_forward_clamps_at_last_page() {
        let mut cursor = NavigationCursor::new("home.com");
        cursor.visit("a.com");
        cursor.back(1);

        let outcome = cursor.forward(3);
        assert_eq!(outcome.url, "a.com");
        assert_eq!(outcome.taken, 1);
        assert_eq!(outcome.boundary, Some(Boundary::LastPage));
    }

    #[test]
    fn test_zero_or_negative_steps_is_a_no_op() {
        let mut cursor = NavigationCursor::new("home.com");
        cursor.visit("a.com");

        let outcome = cursor.back(0);
        assert_eq!(outcome.url, "a.com");
        assert_eq!(outcome.taken, 0);
        assert_eq!(outcome.boundary, None);

        let outcome = cursor.forward(-3);
        assert_eq!(outcome.url, "a.com");
        assert_eq!(outcome.taken, 0);
        assert_eq!(outcome.boundary, None);
    }

    #[test]
    fn test_visit_discards_forward_branch() {
        let mut cursor = NavigationCursor::new("home.com");
        cursor.visit("a.com");
        cursor.visit("b.com");
        cursor.back(1);

        cursor.visit("c.com");

        // The branch holding b.com is gone: forward stops at c.com, and
        // stepping back lands on a.com.
        assert_eq!(cursor.current_url(), "c.com");
        assert!(!cursor.can_go_forward());
        assert_eq!(cursor.back(1).url, "a.com");
        assert_eq!(cursor.forward(1).url, "c.com");
    }

    #[test]
    fn test_released_slots_are_recycled() {
        let mut cursor = NavigationCursor::new("home.com");
        cursor.visit("a.com");
        cursor.visit("b.com");
        cursor.visit("c.com");
        cursor.back(2);

        // Discards b.com and c.com, then reuses their slots.
        cursor.visit("d.com");
        cursor.visit("e.com");

        assert_eq!(cursor.nodes.len(), 4);
        assert_eq!(cursor.current_url(), "e.com");
        assert_eq!(cursor.back(3).url, "home.com");
        assert_eq!(cursor.forward(3).url, "e.com");
    }
}
