//! Aggregated per-clinic results of one batch run.

use pf_core::{ClinicKind, Minutes, StationId};
use pf_flow::PatientClass;

/// Utilisation figures for one station.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationUtilization {
    pub station:  StationId,
    pub capacity: u32,
    /// Services finished at or before the horizon.
    pub completed: u64,
    /// Busy time averaged over every unit, within [0, 100].
    pub utilization_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClinicReport {
    pub arrivals:   u64,
    /// Patients that exited at or before the horizon.
    pub throughput: u64,

    pub avg_length_of_stay: Minutes,
    pub avg_wait_time:      Minutes,
    pub avg_service_time:   Minutes,

    pub doctor_utilization_percent: f64,
    /// In routing order.
    pub station_utilization: Vec<StationUtilization>,
    /// Arrivals indexed by `PatientClass::index()`.
    pub class_counts: [u64; 3],
}

impl ClinicReport {
    #[inline]
    pub fn class_count(&self, class: PatientClass) -> u64 {
        self.class_counts[class.index()]
    }

    pub fn station(&self, id: StationId) -> Option<&StationUtilization> {
        self.station_utilization.iter().find(|s| s.station == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchReport {
    pub duration: Minutes,
    pub events_processed: u64,
    pub standard: ClinicReport,
    pub ai:       ClinicReport,
}

impl BatchReport {
    pub fn clinic(&self, clinic: ClinicKind) -> &ClinicReport {
        match clinic {
            ClinicKind::Standard  => &self.standard,
            ClinicKind::AiEnabled => &self.ai,
        }
    }
}
