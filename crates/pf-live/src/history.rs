//! Periodic time-series samples for the host's charts.

use pf_core::Minutes;

/// Minimum simulated minutes between two samples.
pub const HISTORY_INTERVAL: Minutes = 5.0;

/// Cumulative counters at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistorySample {
    pub time: Minutes,
    pub finished_standard: u64,
    /// Walk-in plus digital.
    pub finished_ai: u64,
    pub waiting_standard: u64,
    pub waiting_ai: u64,
    pub standard_doctor_utilization: f64,
    pub ai_doctor_utilization: f64,
}
