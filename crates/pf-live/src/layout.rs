//! The fixed clinic floor plan agents walk across.
//!
//! Standard clinic on the left half, AI clinic on the right half.  Every
//! service station has a queue point (its waiting area) and a service point
//! (the desk / kiosk / consulting room).

use pf_core::{ClinicKind, Point, StationId};
use pf_flow::Stage;

/// Walking speed in layout units per simulated minute.
pub const WALK_SPEED: f64 = 100.0;

/// Waypoint coordinates for both clinics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Indexed by `ClinicKind` (Standard = 0, AiEnabled = 1).
    pub entries: [Point; 2],
    pub exits:   [Point; 2],
    /// Indexed by `StationId::index()`.
    pub queue_points:   [Point; StationId::COUNT],
    pub service_points: [Point; StationId::COUNT],
}

impl Layout {
    /// The default 1000 × 600 floor.
    pub fn default_floor() -> Self {
        let mut queue_points = [Point::default(); StationId::COUNT];
        let mut service_points = [Point::default(); StationId::COUNT];
        for (station, queue, service) in [
            (StationId::Reception,      Point::new(140.0, 300.0), Point::new(200.0, 300.0)),
            (StationId::StandardDoctor, Point::new(300.0, 300.0), Point::new(400.0, 300.0)),
            (StationId::Kiosk,          Point::new(640.0, 200.0), Point::new(700.0, 200.0)),
            (StationId::Triage,         Point::new(760.0, 300.0), Point::new(820.0, 300.0)),
            (StationId::AiDoctor,       Point::new(880.0, 300.0), Point::new(940.0, 300.0)),
        ] {
            queue_points[station.index()] = queue;
            service_points[station.index()] = service;
        }
        Self {
            entries: [Point::new(40.0, 300.0), Point::new(560.0, 300.0)],
            exits:   [Point::new(460.0, 520.0), Point::new(960.0, 520.0)],
            queue_points,
            service_points,
        }
    }

    #[inline]
    pub fn entry(&self, clinic: ClinicKind) -> Point {
        self.entries[clinic_index(clinic)]
    }

    #[inline]
    pub fn exit(&self, clinic: ClinicKind) -> Point {
        self.exits[clinic_index(clinic)]
    }

    #[inline]
    pub fn queue_point(&self, station: StationId) -> Point {
        self.queue_points[station.index()]
    }

    #[inline]
    pub fn service_point(&self, station: StationId) -> Point {
        self.service_points[station.index()]
    }

    /// Where a patient of `clinic` walks to for `stage`.
    pub fn waypoint(&self, clinic: ClinicKind, stage: Stage) -> Point {
        match stage {
            Stage::Visit(station) => self.queue_point(station),
            Stage::Exit           => self.exit(clinic),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::default_floor()
    }
}

fn clinic_index(clinic: ClinicKind) -> usize {
    match clinic {
        ClinicKind::Standard  => 0,
        ClinicKind::AiEnabled => 1,
    }
}
