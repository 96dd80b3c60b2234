//! `pf-live`: the continuously stepped engine behind the live animation.
//!
//! # Step loop
//!
//! ```text
//! update(dt):
//!   ① Clock     : advance by dt (negative / NaN treated as 0).
//!   ② Busy time : every station accrues (busy / capacity) · dt.
//!   ③ Arrivals  : pop every joint arrival with time ≤ now, in order.
//!   ④ Agents    : each live agent evaluates its state once:
//!                   Moving     → walk towards its waypoint; on arrival
//!                                join the station queue or complete.
//!                   Waiting    → try_admit at the station (head only).
//!                   Processing → when done, release and head to the
//!                                next stage from the routing table.
//!   ⑤ Cleanup   : completed agents leave the live set.
//!   ⑥ History   : append a sample once ≥ 5 simulated minutes elapsed.
//! ```
//!
//! The host calls `update` once per rendered frame with whatever `dt` the
//! frame took; large deltas still spawn every arrival instant they span.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pf_core::{ClinicConfig, SimRng};
//! use pf_live::LiveEngineBuilder;
//!
//! let mut engine = LiveEngineBuilder::new(ClinicConfig::default())
//!     .rng(SimRng::new(42))
//!     .build()?;
//! engine.update(0.25)?;
//! let frame = engine.snapshot();
//! ```

pub mod agent;
pub mod builder;
pub mod engine;
pub mod error;
pub mod history;
pub mod layout;
pub mod observer;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentState};
pub use builder::LiveEngineBuilder;
pub use engine::LiveEngine;
pub use error::{LiveError, LiveResult};
pub use history::{HISTORY_INTERVAL, HistorySample};
pub use layout::{Layout, WALK_SPEED};
pub use observer::{LiveObserver, NoopObserver};
pub use snapshot::{LiveSnapshot, PatientView, RoomView};
pub use stats::{ClinicTally, LiveStats};
