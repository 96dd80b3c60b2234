//! Owned, read-only copies of the live state for the host renderer.
//!
//! The engine mutates its state in place every tick; anything the host wants
//! to keep across ticks must come from here.

use pf_core::{Minutes, PatientId, Point, StationId};
use pf_flow::PatientClass;

use crate::{Agent, AgentState, HistorySample, LiveStats};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientView {
    pub id:                 PatientId,
    pub class:              PatientClass,
    pub state:              AgentState,
    pub position:           Point,
    pub current_station_id: Option<StationId>,
}

impl From<&Agent> for PatientView {
    fn from(a: &Agent) -> Self {
        Self {
            id:                 a.id,
            class:              a.class,
            state:              a.state,
            position:           a.position,
            current_station_id: a.current_station(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoomView {
    pub id:          StationId,
    pub queue_label: &'static str,
    pub capacity:    u32,
    pub staff_busy:  u32,
    /// Head first.
    pub queue:       Vec<PatientId>,
    pub occupants:   Vec<PatientId>,
    pub handled:     u64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LiveSnapshot {
    pub time:     Minutes,
    pub patients: Vec<PatientView>,
    pub rooms:    Vec<RoomView>,
    pub history:  Vec<HistorySample>,
    pub stats:    LiveStats,
}
