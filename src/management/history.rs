use std::collections::VecDeque;

/// Newest-first list that keeps at most `max_entries` items.
#[derive(Debug, Clone)]
pub struct BoundedHistory<T> {
    max_entries: usize,
    entries: VecDeque<T>,
}

impl<T: Clone> BoundedHistory<T> {
    /// Creates an empty history. With `max_entries` of zero nothing is
    /// ever kept.
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            entries: VecDeque::with_capacity(max_entries),
        }
    }

    /// Inserts `item` at the front and drops whatever falls off the end.
    pub fn push(&mut self, item: T) {
        self.entries.push_front(item);
        self.entries.truncate(self.max_entries);
    }

    /// Snapshot of the entries, newest first.
    pub fn entries(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
