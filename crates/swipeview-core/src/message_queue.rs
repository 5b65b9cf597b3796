//! Tagged one-shot delayed messages.
//!
//! A widget posts a message with a tag, the host delivers it once its
//! deadline passes, and any pending message can be removed by tag first.
//! Removal by tag is what keeps a stale timer from firing after the gesture
//! state has moved on.

use smallvec::SmallVec;

#[derive(Clone, Debug)]
struct Pending<M> {
    deadline_millis: u64,
    sequence: u64,
    message: M,
}

/// Queue of messages ordered by deadline, then by posting order.
#[derive(Clone, Debug)]
pub struct MessageQueue<M> {
    pending: SmallVec<[Pending<M>; 4]>,
    next_sequence: u64,
}

impl<M> Default for MessageQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> MessageQueue<M> {
    pub fn new() -> Self {
        Self {
            pending: SmallVec::new(),
            next_sequence: 0,
        }
    }

    /// Posts `message` to fire at the absolute time `deadline_millis`.
    pub fn send_at(&mut self, message: M, deadline_millis: u64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let entry = Pending {
            deadline_millis,
            sequence,
            message,
        };
        let index = self
            .pending
            .iter()
            .position(|pending| {
                (pending.deadline_millis, pending.sequence) > (deadline_millis, sequence)
            })
            .unwrap_or(self.pending.len());
        self.pending.insert(index, entry);
    }

    /// Posts `message` to fire `delay_millis` after `now_millis`.
    pub fn send_delayed(&mut self, message: M, now_millis: u64, delay_millis: u64) {
        self.send_at(message, now_millis.saturating_add(delay_millis));
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.first().map(|pending| pending.deadline_millis)
    }

    /// Removes and returns every message due at `now_millis`, oldest first.
    pub fn take_due(&mut self, now_millis: u64) -> SmallVec<[M; 4]> {
        let due = self
            .pending
            .iter()
            .take_while(|pending| pending.deadline_millis <= now_millis)
            .count();
        self.pending
            .drain(..due)
            .map(|pending| pending.message)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<M: PartialEq> MessageQueue<M> {
    /// Removes every pending message equal to `message`; returns how many.
    pub fn remove(&mut self, message: &M) -> usize {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.message != *message);
        let removed = before - self.pending.len();
        if removed > 0 {
            log::trace!("removed {removed} pending message(s)");
        }
        removed
    }

    pub fn contains(&self, message: &M) -> bool {
        self.pending.iter().any(|pending| pending.message == *message)
    }
}

#[cfg(test)]
#[path = "tests/message_queue_tests.rs"]
mod tests;
