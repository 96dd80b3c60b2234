//! Batch-mode station: earliest-free-unit seizure without a queue object.
//!
//! Because the batch engine resolves requests in time order, picking the
//! unit with the smallest free time and starting at `max(now, free_at)`
//! reproduces exact FIFO contention.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pf_core::{Minutes, StationId, UnitIndex};

/// Result of one [`UnitPool::seize`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Seizure {
    pub unit:   UnitIndex,
    pub start:  Minutes,
    pub finish: Minutes,
    pub wait:   Minutes,
}

/// One unit keyed by the time it next falls idle.
#[derive(Copy, Clone, Debug)]
struct FreeAt {
    at:   Minutes,
    unit: u32,
}

impl PartialEq for FreeAt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FreeAt {}

impl PartialOrd for FreeAt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FreeAt {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: earliest time, then lowest index, on top.
        other.at.total_cmp(&self.at).then_with(|| other.unit.cmp(&self.unit))
    }
}

/// `capacity` parallel units, each with an availability time and a
/// cumulative busy-time accumulator.
#[derive(Clone, Debug)]
pub struct UnitPool {
    station:   StationId,
    free:      BinaryHeap<FreeAt>,
    busy_time: Vec<Minutes>,
}

impl UnitPool {
    /// All units free from time zero.  `capacity` must be at least 1.
    pub fn new(station: StationId, capacity: u32) -> Self {
        debug_assert!(capacity >= 1, "{station} built with zero units");
        Self {
            station,
            free:      (0..capacity).map(|unit| FreeAt { at: 0.0, unit }).collect(),
            busy_time: vec![0.0; capacity as usize],
        }
    }

    #[inline]
    pub fn station(&self) -> StationId {
        self.station
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.busy_time.len() as u32
    }

    #[inline]
    pub fn busy_time(&self) -> &[Minutes] {
        &self.busy_time
    }

    /// Claim the earliest-free unit for `duration` minutes starting no
    /// earlier than `now`.  Ties go to the lowest index.  Never fails.
    pub fn seize(&mut self, now: Minutes, duration: Minutes) -> Seizure {
        let Some(mut slot) = self.free.peek_mut() else {
            unreachable!("{} built with zero units", self.station);
        };
        let start = now.max(slot.at);
        let finish = start + duration;
        let unit = slot.unit;
        slot.at = finish;
        drop(slot);
        self.busy_time[unit as usize] += duration;

        Seizure {
            unit: UnitIndex(unit),
            start,
            finish,
            wait: start - now,
        }
    }

    /// Busy time summed over every unit.
    pub fn total_busy_time(&self) -> Minutes {
        self.busy_time.iter().sum()
    }

    /// Average utilisation across *all* units over `horizon`, in percent,
    /// capped at 100.
    pub fn utilization_percent(&self, horizon: Minutes) -> f64 {
        if horizon <= 0.0 {
            return 0.0;
        }
        let capacity_minutes = horizon * self.busy_time.len() as f64;
        (self.total_busy_time() / capacity_minutes * 100.0).clamp(0.0, 100.0)
    }
}
