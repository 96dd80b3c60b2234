use pf_core::{Minutes, PatientId};
use pf_flow::PatientClass;

/// Completed-visit bookkeeping for one batch patient.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientRecord {
    pub id:      PatientId,
    pub class:   PatientClass,
    pub arrival: Minutes,
    /// `None` until the patient reaches the exit.
    pub exit:    Option<Minutes>,
    /// Sum of the waits for a free unit across every station.
    pub wait:    Minutes,
    pub service: Minutes,
}

impl PatientRecord {
    pub(crate) fn new(id: PatientId, class: PatientClass, arrival: Minutes) -> Self {
        Self { id, class, arrival, exit: None, wait: 0.0, service: 0.0 }
    }

    /// Arrival to exit.  Equals `wait + service`: the batch model has no
    /// walking time between stations.
    pub fn length_of_stay(&self) -> Option<Minutes> {
        self.exit.map(|t| t - self.arrival)
    }

    /// Exited at or before `horizon`.
    pub fn exited_by(&self, horizon: Minutes) -> bool {
        self.exit.is_some_and(|t| t <= horizon)
    }
}
