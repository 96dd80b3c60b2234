use pf_core::{ClinicKind, CoreError, PatientId};
use pf_flow::FlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("routing table violated: {0}")]
    Routing(#[from] FlowError),

    #[error("no record for {clinic} patient {id}")]
    UnknownPatient { clinic: ClinicKind, id: PatientId },

    #[error("at least one replication is required")]
    NoReplications,
}

pub type BatchResult<T> = Result<T, BatchError>;
