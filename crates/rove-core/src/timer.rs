//! [`Timers`]: a keyed queue of deferred tasks.
//!
//! Close checks after mouseout/blur must run after a fixed delay and must
//! read live state when they run, not when they were scheduled. Keeping at
//! most one pending entry per key avoids piling up redundant re-checks:
//! scheduling under a key that already has a pending entry replaces it.

use std::time::Instant;

#[derive(Debug, Clone)]
struct Entry<K, T> {
    key: K,
    deadline: Instant,
    task: T,
}

/// A queue of deferred tasks, at most one pending per key.
#[derive(Debug, Clone)]
pub struct Timers<K, T> {
    entries: Vec<Entry<K, T>>,
}

impl<K: PartialEq + Copy, T> Timers<K, T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `task` to fire at `deadline`, replacing any pending entry
    /// under the same key.
    pub fn schedule(&mut self, key: K, deadline: Instant, task: T) {
        self.cancel(key);
        self.entries.push(Entry {
            key,
            deadline,
            task,
        });
    }

    /// Drop the pending entry under `key`, if any.
    pub fn cancel(&mut self, key: K) {
        self.entries.retain(|e| e.key != key);
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// in deadline order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<Entry<K, T>> = Vec::new();
        let mut rest: Vec<Entry<K, T>> = Vec::new();
        for e in self.entries.drain(..) {
            if e.deadline <= now {
                due.push(e);
            } else {
                rest.push(e);
            }
        }
        self.entries = rest;
        due.sort_by_key(|e| e.deadline);
        due.into_iter().map(|e| e.task).collect()
    }

    /// The earliest pending deadline, if any. Hosts can use this to decide
    /// when to call back.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: PartialEq + Copy, T> Default for Timers<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn schedule_and_pop() {
        let now = Instant::now();
        let mut t: Timers<u32, &str> = Timers::new();
        t.schedule(1, now + Duration::from_millis(10), "a");
        t.schedule(2, now + Duration::from_millis(5), "b");

        assert!(t.pop_due(now).is_empty());
        let due = t.pop_due(now + Duration::from_millis(10));
        assert_eq!(due, vec!["b", "a"]);
        assert!(t.is_empty());
    }

    #[test]
    fn reschedule_replaces_same_key() {
        let now = Instant::now();
        let mut t: Timers<u32, &str> = Timers::new();
        t.schedule(1, now + Duration::from_millis(5), "first");
        t.schedule(1, now + Duration::from_millis(50), "second");
        assert_eq!(t.len(), 1);

        // The superseded entry never fires.
        assert!(t.pop_due(now + Duration::from_millis(5)).is_empty());
        assert_eq!(t.pop_due(now + Duration::from_millis(50)), vec!["second"]);
    }

    #[test]
    fn cancel_drops_entry() {
        let now = Instant::now();
        let mut t: Timers<u32, &str> = Timers::new();
        t.schedule(1, now, "a");
        t.cancel(1);
        assert!(t.pop_due(now + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn next_deadline_is_earliest() {
        let now = Instant::now();
        let mut t: Timers<u32, &str> = Timers::new();
        assert!(t.next_deadline().is_none());
        t.schedule(1, now + Duration::from_millis(30), "a");
        t.schedule(2, now + Duration::from_millis(10), "b");
        assert_eq!(t.next_deadline(), Some(now + Duration::from_millis(10)));
    }
}
