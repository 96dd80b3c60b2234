use pf_core::{PatientId, StationId};
use thiserror::Error;

/// Station bookkeeping violations.  These indicate a corrupted registry, not
/// a user mistake, and abort the operation that hit them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StationError {
    #[error("{patient} is not being served at {station}")]
    NotOccupant {
        station: StationId,
        patient: PatientId,
    },

    #[error("{patient} is already queued at {station}")]
    AlreadyQueued {
        station: StationId,
        patient: PatientId,
    },
}

pub type StationResult<T> = Result<T, StationError>;
