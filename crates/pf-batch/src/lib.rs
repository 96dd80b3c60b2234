//! `pf-batch`: the discrete-event engine behind the aggregate comparison.
//!
//! # Run loop
//!
//! ```text
//! run():
//!   ① Arrivals : pre-generate the whole joint arrival stream and schedule
//!                one Arrival event per patient (two per joint arrival).
//!   ② Drain    : pop the earliest event (ties in scheduling order):
//!                  stage is a station → seize its earliest free unit and
//!                                       schedule ServiceCompleted at finish,
//!                                       tagged with the next stage.
//!                  stage is Exit      → record the exit time.
//!   ③ Report   : aggregate per clinic over patients that exited within the
//!                horizon.
//! ```
//!
//! No queue objects are kept: contention is resolved entirely by the
//! per-unit `available_at` ordering in [`UnitPool`][pf_station::UnitPool].

pub mod engine;
pub mod error;
pub mod event;
pub mod record;
pub mod replicate;
pub mod report;

#[cfg(test)]
mod tests;

pub use engine::BatchEngine;
pub use error::{BatchError, BatchResult};
pub use event::{Event, EventKind, EventQueue};
pub use record::PatientRecord;
pub use replicate::{ClinicMeans, ReplicationSummary, replicate};
pub use report::{BatchReport, ClinicReport, StationUtilization};
