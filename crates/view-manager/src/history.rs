//! Navigation history — a bounded most-recent-N buffer of page descriptors.
//!
//! The buffer holds at most `N` entries (embedded-safe, no heap). Pushing
//! when full evicts the oldest entry instead of rejecting the new one, so the
//! history always reflects the last `N` pages visited.

use heapless::Deque;

use crate::page::Page;

/// History of visited page descriptors, oldest first.
///
/// `N` must be greater than zero.
pub struct History<'p, H, const N: usize> {
    entries: Deque<&'p dyn Page<H>, N>,
}

impl<'p, H, const N: usize> History<'p, H, N> {
    /// Create an empty history.
    pub const fn new() -> Self {
        History {
            entries: Deque::new(),
        }
    }

    /// Record `page` as the newest entry.
    ///
    /// Returns the evicted oldest entry when the history was already full.
    pub fn push(&mut self, page: &'p dyn Page<H>) -> Option<&'p dyn Page<H>> {
        let evicted = if self.entries.is_full() {
            self.entries.pop_front()
        } else {
            None
        };
        // Cannot fail: a slot was freed above when the deque was full.
        self.entries.push_back(page).ok();
        evicted
    }

    /// Remove and return the newest entry.
    pub fn pop(&mut self) -> Option<&'p dyn Page<H>> {
        self.entries.pop_back()
    }

    /// Newest entry.
    #[must_use]
    pub fn top(&self) -> Option<&'p dyn Page<H>> {
        self.entries.back().copied()
    }

    /// Entry just below the newest one, i.e. the back-navigation target.
    #[must_use]
    pub fn previous(&self) -> Option<&'p dyn Page<H>> {
        let len = self.entries.len();
        if len < 2 {
            return None;
        }
        self.entries.iter().nth(len.saturating_sub(2)).copied()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when the next push will evict.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &'p dyn Page<H>> + '_ {
        self.entries.iter().copied()
    }
}

impl<H, const N: usize> Default for History<'_, H, N> {
    fn default() -> Self {
        Self::new()
    }
}
