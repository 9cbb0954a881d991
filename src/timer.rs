//! Host timer-service contract and a default deadline-queue implementation.
//!
//! The kinetic scroll container needs exactly two things from its host: the
//! ability to schedule a callback after a delay and the ability to cancel a
//! previously scheduled callback by identity. [`TimerService`] captures that
//! contract; [`TimerQueue`] is a straightforward implementation for hosts
//! that poll between frames. Expiry re-enters the widget tree as
//! [`crate::Event::Timer`].

use std::time::Duration;

use web_time::Instant;

/// Identity of one scheduled callback.
///
/// Tokens are never reused within one service instance, so a stale token
/// from an already-fired or cancelled timer can be cancelled again without
/// affecting later registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Wrap a raw id. Custom [`TimerService`] implementations mint their
    /// tokens through this; ids must not be reused within one service.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Scheduling facility the host must provide.
pub trait TimerService {
    /// Schedule a one-shot callback after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerToken;

    /// Cancel a pending callback. Must be idempotent: cancelling a token
    /// that already fired or was already cancelled is a no-op.
    fn cancel(&mut self, token: TimerToken);
}

/// A deadline-sorted timer queue for polling hosts.
///
/// The host calls [`TimerQueue::due`] once per event-loop iteration (or
/// sleeps until [`TimerQueue::next_deadline`]) and feeds the returned tokens
/// to the widget as [`crate::Event::Timer`] events.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    entries: Vec<(TimerToken, Instant)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any callback is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|(_, at)| *at).min()
    }

    /// Remove and return all tokens whose deadline has passed, in deadline
    /// order.
    pub fn due(&mut self) -> Vec<TimerToken> {
        let now = Instant::now();
        let mut fired: Vec<(TimerToken, Instant)> = Vec::new();
        self.entries.retain(|entry| {
            if entry.1 <= now {
                fired.push(*entry);
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|(_, at)| *at);
        fired.into_iter().map(|(token, _)| token).collect()
    }
}

impl TimerService for TimerQueue {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        self.entries.push((token, Instant::now() + delay));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.entries.retain(|(t, _)| *t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delay_fires_immediately() {
        let mut queue = TimerQueue::new();
        let token = queue.schedule(Duration::ZERO);
        assert_eq!(queue.due(), vec![token]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_future_deadline_not_due() {
        let mut queue = TimerQueue::new();
        let _token = queue.schedule(Duration::from_secs(3600));
        assert!(queue.due().is_empty());
        assert!(!queue.is_empty());
        assert!(queue.next_deadline().is_some());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut queue = TimerQueue::new();
        let token = queue.schedule(Duration::ZERO);
        queue.cancel(token);
        queue.cancel(token);
        assert!(queue.due().is_empty());
    }

    #[test]
    fn test_due_returns_deadline_order() {
        let mut queue = TimerQueue::new();
        let early = queue.schedule(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        let late = queue.schedule(Duration::ZERO);
        assert_eq!(queue.due(), vec![early, late]);
    }

    #[test]
    fn test_tokens_are_unique() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule(Duration::ZERO);
        let b = queue.schedule(Duration::ZERO);
        assert_ne!(a, b);
    }
}
