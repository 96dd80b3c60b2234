//! `pf-core`: foundational types for the patient-flow comparison engines.
//!
//! Every other `pf-*` crate depends on this one.  It has no `pf-*`
//! dependencies and only `rand` and `thiserror` externally (plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`ids`]        | `PatientId`, `UnitIndex`, `StationId`, `ClinicKind`     |
//! | [`time`]       | `Minutes`, `SimClock`                                   |
//! | [`rng`]        | `SimRng` (seeded or entropy-seeded)                     |
//! | [`variates`]   | exponential, triangular and normal generators           |
//! | [`config`]     | `ClinicConfig` and its validation                       |
//! | [`geo`]        | planar `Point` used by the floor layout                 |
//! | [`error`]      | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod variates;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ClinicConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{ClinicKind, PatientId, StationId, UnitIndex};
pub use rng::SimRng;
pub use time::{Minutes, SimClock};
pub use variates::SERVICE_TIME_FLOOR;
