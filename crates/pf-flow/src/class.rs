//! Patient classes.

use std::fmt;

use pf_core::ClinicKind;

/// Which path a patient takes through its clinic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatientClass {
    /// Standard clinic patient.
    Standard,
    /// AI clinic patient who checks in at a kiosk.
    AiWalkIn,
    /// AI clinic patient who checked in digitally; skips the kiosk.
    AiDigital,
}

impl PatientClass {
    pub const ALL: [PatientClass; 3] =
        [PatientClass::Standard, PatientClass::AiWalkIn, PatientClass::AiDigital];

    /// Dense index for per-class counters.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PatientClass::Standard  => 0,
            PatientClass::AiWalkIn  => 1,
            PatientClass::AiDigital => 2,
        }
    }

    pub fn clinic(self) -> ClinicKind {
        match self {
            PatientClass::Standard => ClinicKind::Standard,
            PatientClass::AiWalkIn | PatientClass::AiDigital => ClinicKind::AiEnabled,
        }
    }

    /// Class of an AI-clinic arrival given the digital check-in outcome.
    #[inline]
    pub fn ai(digital: bool) -> PatientClass {
        if digital { PatientClass::AiDigital } else { PatientClass::AiWalkIn }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatientClass::Standard  => "STANDARD",
            PatientClass::AiWalkIn  => "AI_WALK_IN",
            PatientClass::AiDigital => "AI_DIGITAL",
        }
    }
}

impl fmt::Display for PatientClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
