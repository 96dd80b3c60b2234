//! The per-class routing table.
//!
//! Keyed by `(PatientClass, current station) → next Stage`.  Every lookup is
//! an exhaustive `match`, so adding a station or class fails to compile until
//! the table is updated.

use std::fmt;

use pf_core::StationId;

use crate::{FlowError, FlowResult, PatientClass};

/// Where a patient is headed next.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Queue for, then be served at, `StationId`.
    Visit(StationId),
    /// Leave the network.  Terminal.
    Exit,
}

impl Stage {
    pub fn station(self) -> Option<StationId> {
        match self {
            Stage::Visit(s) => Some(s),
            Stage::Exit     => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Visit(s) => write!(f, "{s}"),
            Stage::Exit     => f.write_str("exit"),
        }
    }
}

/// The ordered service stations visited by `class`.
pub fn route(class: PatientClass) -> &'static [StationId] {
    match class {
        PatientClass::Standard  => &[StationId::Reception, StationId::StandardDoctor],
        PatientClass::AiWalkIn  => &[StationId::Kiosk, StationId::Triage, StationId::AiDoctor],
        PatientClass::AiDigital => &[StationId::Triage, StationId::AiDoctor],
    }
}

/// The stage a freshly spawned patient heads to.
pub fn first_stage(class: PatientClass) -> Stage {
    match class {
        PatientClass::Standard  => Stage::Visit(StationId::Reception),
        PatientClass::AiWalkIn  => Stage::Visit(StationId::Kiosk),
        PatientClass::AiDigital => Stage::Visit(StationId::Triage),
    }
}

/// The stage following service at `from`.
///
/// # Errors
///
/// [`FlowError::NoRoute`] if `class` never visits `from`.
pub fn next_stage(class: PatientClass, from: StationId) -> FlowResult<Stage> {
    use PatientClass::*;
    use StationId::*;

    match (class, from) {
        (Standard, Reception)      => Ok(Stage::Visit(StandardDoctor)),
        (Standard, StandardDoctor) => Ok(Stage::Exit),

        (AiWalkIn, Kiosk)                  => Ok(Stage::Visit(Triage)),
        (AiWalkIn | AiDigital, Triage)     => Ok(Stage::Visit(AiDoctor)),
        (AiWalkIn | AiDigital, AiDoctor)   => Ok(Stage::Exit),

        (Standard, Kiosk | Triage | AiDoctor)
        | (AiWalkIn | AiDigital, Reception | StandardDoctor)
        | (AiDigital, Kiosk) => Err(FlowError::NoRoute { class, station: from }),
    }
}
