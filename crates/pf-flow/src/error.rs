use pf_core::StationId;
use thiserror::Error;

use crate::PatientClass;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The routing table has no transition out of `station` for `class`.
    /// Only reachable through a corrupted patient record.
    #[error("no route for {class} patient leaving {station}")]
    NoRoute {
        class:   PatientClass,
        station: StationId,
    },
}

pub type FlowResult<T> = Result<T, FlowError>;
