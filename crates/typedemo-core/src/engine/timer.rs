//! Logical-time timer queue
//!
//! Time is a `Duration` since the queue was created. Nothing here reads a
//! real clock: callers move time forward and pop whatever became due.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled continuation, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    /// Ordered by due time, then by scheduling order
    entries: BTreeMap<(Duration, u64), T>,
    due_by_seq: HashMap<u64, Duration>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            entries: BTreeMap::new(),
            due_by_seq: HashMap::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to become due `delay` after the current time
    pub fn schedule_after(&mut self, delay: Duration, payload: T) -> TimerId {
        let due = self.now + delay;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert((due, seq), payload);
        self.due_by_seq.insert(seq, due);
        TimerId(seq)
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_by_seq.remove(&id.0) {
            Some(due) => self.entries.remove(&(due, id.0)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_by_seq.contains_key(&id.0)
    }

    /// Due time of the earliest pending timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time so follow-up timers are scheduled relative to it
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let (&(due, seq), _) = self.entries.first_key_value()?;
        if due > until {
            return None;
        }
        let payload = self.entries.remove(&(due, seq))?;
        self.due_by_seq.remove(&seq);
        self.now = self.now.max(due);
        Some((TimerId(seq), payload))
    }

    /// Move the clock forward; never moves it back
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
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

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_pops_in_due_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(ms(50), "b");
        queue.schedule_after(ms(10), "a");
        queue.schedule_after(ms(50), "c");

        assert_eq!(queue.next_deadline(), Some(ms(10)));
        let popped: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(100)))
            .map(|(_, p)| p)
            .collect();
        assert_eq!(popped, vec!["a", "b", "c"]);
        assert_eq!(queue.now(), ms(50));
    }

    #[test]
    fn test_not_due_yet() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(ms(80), ());
        assert!(queue.pop_due(ms(79)).is_none());
        assert!(queue.pop_due(ms(80)).is_some());
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_after(ms(5), 1);
        assert!(queue.is_pending(id));
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(queue.is_empty());
        assert!(queue.pop_due(ms(10)).is_none());
    }

    #[test]
    fn test_schedule_relative_to_popped_due_time() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(ms(100), 1);
        let _ = queue.pop_due(ms(1000));
        queue.schedule_after(ms(100), 2);
        assert_eq!(queue.next_deadline(), Some(ms(200)));
    }

    #[test]
    fn test_clock_never_moves_back() {
        let mut queue: TimerQueue<()> = TimerQueue::new();
        queue.advance_clock(ms(30));
        queue.advance_clock(ms(10));
        assert_eq!(queue.now(), ms(30));
    }
}
