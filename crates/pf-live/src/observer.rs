//! Engine observer trait for progress reporting and data collection.

use pf_core::Minutes;

use crate::{Agent, HistorySample};

/// Callbacks invoked by [`LiveEngine::update_observed`][crate::LiveEngine::update_observed]
/// and [`LiveEngine::drive`][crate::LiveEngine::drive].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait LiveObserver {
    /// Called at the end of every update.
    fn on_step_end(&mut self, _time: Minutes) {}

    /// Called whenever a history sample is appended.
    fn on_history_sample(&mut self, _sample: &HistorySample) {}

    /// Called once per agent as it leaves the live set.
    fn on_patient_completed(&mut self, _agent: &Agent) {}

    /// Called once when [`drive`][crate::LiveEngine::drive] finishes.
    fn on_finish(&mut self, _time: Minutes) {}
}

/// A [`LiveObserver`] that does nothing.
pub struct NoopObserver;

impl LiveObserver for NoopObserver {}
