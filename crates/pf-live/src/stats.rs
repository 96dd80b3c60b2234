//! Running statistics exposed alongside the live state.

use pf_core::{ClinicKind, Minutes, StationId};
use pf_flow::PatientClass;

use crate::Agent;

/// Completion totals for one clinic.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClinicTally {
    pub completed:     u64,
    pub total_wait:    Minutes,
    pub total_service: Minutes,
    /// Includes walking time between waypoints.
    pub total_stay:    Minutes,
}

impl ClinicTally {
    pub(crate) fn record(&mut self, agent: &Agent) {
        self.completed += 1;
        self.total_wait += agent.wait_time;
        self.total_service += agent.service_time;
        self.total_stay += agent.length_of_stay().unwrap_or(0.0);
    }

    fn avg(&self, total: Minutes) -> Minutes {
        if self.completed == 0 { 0.0 } else { total / self.completed as f64 }
    }

    pub fn avg_wait_time(&self) -> Minutes {
        self.avg(self.total_wait)
    }

    pub fn avg_service_time(&self) -> Minutes {
        self.avg(self.total_service)
    }

    pub fn avg_length_of_stay(&self) -> Minutes {
        self.avg(self.total_stay)
    }
}

/// Owned statistics at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiveStats {
    pub time: Minutes,
    /// Indexed by `PatientClass::index()`.
    pub spawned:  [u64; 3],
    pub finished: [u64; 3],
    /// Indexed by `StationId::index()`.
    pub handled:     [u64; StationId::COUNT],
    pub utilization: [f64; StationId::COUNT],
    /// Agents still in the live set.
    pub in_system: usize,
    pub standard: ClinicTally,
    pub ai:       ClinicTally,
}

impl LiveStats {
    #[inline]
    pub fn spawned_of(&self, class: PatientClass) -> u64 {
        self.spawned[class.index()]
    }

    #[inline]
    pub fn finished_of(&self, class: PatientClass) -> u64 {
        self.finished[class.index()]
    }

    #[inline]
    pub fn handled_at(&self, station: StationId) -> u64 {
        self.handled[station.index()]
    }

    #[inline]
    pub fn utilization_at(&self, station: StationId) -> f64 {
        self.utilization[station.index()]
    }

    pub fn doctor_utilization(&self, clinic: ClinicKind) -> f64 {
        self.utilization_at(clinic.doctor())
    }

    pub fn tally(&self, clinic: ClinicKind) -> &ClinicTally {
        match clinic {
            ClinicKind::Standard  => &self.standard,
            ClinicKind::AiEnabled => &self.ai,
        }
    }
}
