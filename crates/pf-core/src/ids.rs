//! Strongly typed identifiers.
//!
//! Patients and service units get zero-cost integer wrappers; stations are
//! a closed enum so routing lookups are checked exhaustively at compile time.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Patient identity.  Allocated in strictly increasing order per clinic
    /// by the engine that spawns the patient.
    pub struct PatientId(u32);
}

typed_id! {
    /// Index of one parallel service unit (desk, kiosk, doctor) inside a
    /// station.
    pub struct UnitIndex(u32);
}

impl PatientId {
    /// The id following `self`.
    #[inline]
    pub fn next(self) -> PatientId {
        PatientId(self.0 + 1)
    }
}

// ── ClinicKind ────────────────────────────────────────────────────────────────

/// The two competing networks being compared.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClinicKind {
    /// Reception desk followed by a standard doctor.
    Standard,
    /// Kiosk / digital check-in, nurse triage, then an AI-assisted doctor.
    AiEnabled,
}

impl ClinicKind {
    pub const ALL: [ClinicKind; 2] = [ClinicKind::Standard, ClinicKind::AiEnabled];

    /// Service stations belonging to this clinic, in visit order.
    pub fn stations(self) -> &'static [StationId] {
        match self {
            ClinicKind::Standard  => &[StationId::Reception, StationId::StandardDoctor],
            ClinicKind::AiEnabled => &[StationId::Kiosk, StationId::Triage, StationId::AiDoctor],
        }
    }

    /// The doctor station whose utilisation headlines the comparison.
    pub fn doctor(self) -> StationId {
        match self {
            ClinicKind::Standard  => StationId::StandardDoctor,
            ClinicKind::AiEnabled => StationId::AiDoctor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClinicKind::Standard  => "standard",
            ClinicKind::AiEnabled => "ai",
        }
    }
}

impl fmt::Display for ClinicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StationId ─────────────────────────────────────────────────────────────────

/// A capacity-bound service point.
///
/// Each station owns one FIFO waiting area in front of it; the waiting areas
/// are named by [`StationId::queue_label`] (e.g. the standard doctor's queue
/// is the clinic's main waiting room).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationId {
    Reception,
    StandardDoctor,
    Kiosk,
    Triage,
    AiDoctor,
}

impl StationId {
    /// Number of stations; `index()` is always `< COUNT`.
    pub const COUNT: usize = 5;

    pub const ALL: [StationId; StationId::COUNT] = [
        StationId::Reception,
        StationId::StandardDoctor,
        StationId::Kiosk,
        StationId::Triage,
        StationId::AiDoctor,
    ];

    /// Dense index for per-station arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            StationId::Reception      => 0,
            StationId::StandardDoctor => 1,
            StationId::Kiosk          => 2,
            StationId::Triage         => 3,
            StationId::AiDoctor       => 4,
        }
    }

    pub fn clinic(self) -> ClinicKind {
        match self {
            StationId::Reception | StationId::StandardDoctor => ClinicKind::Standard,
            StationId::Kiosk | StationId::Triage | StationId::AiDoctor => ClinicKind::AiEnabled,
        }
    }

    /// `true` for the two doctor stations.
    #[inline]
    pub fn is_doctor(self) -> bool {
        matches!(self, StationId::StandardDoctor | StationId::AiDoctor)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StationId::Reception      => "reception",
            StationId::StandardDoctor => "standard-doctor",
            StationId::Kiosk          => "kiosk",
            StationId::Triage         => "triage",
            StationId::AiDoctor       => "ai-doctor",
        }
    }

    /// Name of the waiting area in front of this station.
    pub fn queue_label(self) -> &'static str {
        match self {
            StationId::Reception      => "reception-queue",
            StationId::StandardDoctor => "main-wait",
            StationId::Kiosk          => "kiosk-queue",
            StationId::Triage         => "triage-wait",
            StationId::AiDoctor       => "post-triage-wait",
        }
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
