//! `pf-flow`: who goes where, and when they arrive.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`class`]      | `PatientClass` (`Standard`, `AiWalkIn`, `AiDigital`)       |
//! | [`routing`]    | `Stage`, `first_stage`, `next_stage`, `route`              |
//! | [`arrivals`]   | `ArrivalProcess`, `JointArrival`                           |
//! | [`error`]      | `FlowError`, `FlowResult<T>`                               |
//!
//! # Routing (summary)
//!
//! ```text
//! Standard   : entry → reception → standard-doctor                → exit
//! AiWalkIn   : entry → kiosk     → triage          → ai-doctor    → exit
//! AiDigital  : entry             → triage          → ai-doctor    → exit
//! ```
//!
//! Each service station is preceded by its FIFO waiting area (reception
//! queue, main wait, kiosk queue, triage wait, post-triage wait).

pub mod arrivals;
pub mod class;
pub mod error;
pub mod routing;


pub use arrivals::{ArrivalProcess, JointArrival, MIN_ARRIVAL_STEP};
pub use class::PatientClass;
pub use error::{FlowError, FlowResult};
pub use routing::{Stage, first_stage, next_stage, route};
