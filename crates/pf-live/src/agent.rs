//! Per-patient state for the live engine.

use std::fmt;

use pf_core::{Minutes, PatientId, Point, StationId};
use pf_flow::{PatientClass, Stage};

/// Lifecycle of an agent: `Moving → Waiting → Processing → Moving … →
/// Completed`.  Reaching the exit goes straight from `Moving` to
/// `Completed`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    Moving,
    Waiting,
    Processing,
    Completed,
}

impl AgentState {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Moving     => "MOVING",
            AgentState::Waiting    => "WAITING",
            AgentState::Processing => "PROCESSING",
            AgentState::Completed  => "COMPLETED",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One patient walking through a clinic.
///
/// `target` is the stage the agent is heading to (while `Moving`) or
/// currently at (while `Waiting` / `Processing`).
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub id:       PatientId,
    pub class:    PatientClass,
    pub state:    AgentState,
    pub position: Point,
    pub target:   Stage,

    pub arrival_time: Minutes,
    /// The instant up to which this agent has been simulated.  Starts at the
    /// arrival instant so a spawn inside a long frame only walks for the
    /// time it has existed.
    pub local_time: Minutes,

    pub waiting_since:       Minutes,
    pub processing_since:    Minutes,
    pub processing_duration: Minutes,

    /// Cumulative time spent in station queues.
    pub wait_time:    Minutes,
    /// Cumulative time spent in service.
    pub service_time: Minutes,
    pub exit_time:    Option<Minutes>,
}

impl Agent {
    /// A freshly arrived agent standing at `entry`, heading for `target`.
    pub fn spawn(id: PatientId, class: PatientClass, time: Minutes, entry: Point, target: Stage) -> Self {
        Self {
            id,
            class,
            state: AgentState::Moving,
            position: entry,
            target,
            arrival_time: time,
            local_time: time,
            waiting_since: time,
            processing_since: time,
            processing_duration: 0.0,
            wait_time: 0.0,
            service_time: 0.0,
            exit_time: None,
        }
    }

    /// The station the agent is queued at or being served by.
    pub fn current_station(&self) -> Option<StationId> {
        match self.state {
            AgentState::Waiting | AgentState::Processing => self.target.station(),
            AgentState::Moving | AgentState::Completed   => None,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == AgentState::Completed
    }

    /// Service finishes at this instant (meaningful while `Processing`).
    #[inline]
    pub fn processing_ends_at(&self) -> Minutes {
        self.processing_since + self.processing_duration
    }

    /// Arrival to exit, once completed.
    pub fn length_of_stay(&self) -> Option<Minutes> {
        self.exit_time.map(|t| t - self.arrival_time)
    }
}
