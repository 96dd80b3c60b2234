use pf_core::CoreError;
use pf_flow::FlowError;
use pf_station::StationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LiveError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("station bookkeeping violated: {0}")]
    Station(#[from] StationError),

    #[error("routing table violated: {0}")]
    Routing(#[from] FlowError),

    #[error("frame delta must be positive and finite, got {0}")]
    InvalidFrame(f64),
}

pub type LiveResult<T> = Result<T, LiveError>;
