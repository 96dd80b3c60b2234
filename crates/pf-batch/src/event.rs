//! Timestamped events and the min-ordered event queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pf_core::{ClinicKind, Minutes, PatientId, StationId};
use pf_flow::Stage;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EventKind {
    /// The patient enters its clinic.
    Arrival,
    /// Service at the given station just finished.
    ServiceCompleted(StationId),
}

/// The patient reaches `stage` at `time`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Event {
    pub time:    Minutes,
    pub kind:    EventKind,
    pub clinic:  ClinicKind,
    pub patient: PatientId,
    pub stage:   Stage,
}

// ── Queue ─────────────────────────────────────────────────────────────────────

struct Scheduled {
    event: Event,
    seq:   u64,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .event
            .time
            .total_cmp(&self.event.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Events popped earliest first; equal times pop in scheduling order.
#[derive(Default)]
pub struct EventQueue {
    heap:     BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.heap.push(Scheduled { event, seq: self.next_seq });
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|s| s.event)
    }

    pub fn peek_time(&self) -> Option<Minutes> {
        self.heap.peek().map(|s| s.event.time)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
