//! `pf-station`: the resource model shared by both engines.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`service`]       | `ServiceModel`: per-station service-time distribution    |
//! | [`queue_station`] | `QueueStation`: FIFO queue + busy units (live engine)    |
//! | [`unit_pool`]     | `UnitPool`, `Seizure`: earliest-free-unit (batch engine) |
//! | [`error`]         | `StationError`, `StationResult<T>`                        |
//!
//! Both variants honour the same contract: never more than `capacity`
//! patients in service, and admission strictly in arrival order.

pub mod error;
pub mod queue_station;
pub mod service;
pub mod unit_pool;


pub use error::{StationError, StationResult};
pub use queue_station::QueueStation;
pub use service::ServiceModel;
pub use unit_pool::{Seizure, UnitPool};
