//! Run configuration shared by both engines.
//!
//! Typically deserialised from JSON by the host application (with the
//! `serde` feature) and validated once at engine construction.

use crate::{CoreError, CoreResult, Minutes, StationId};

/// Immutable per-run configuration.
///
/// Field names mirror the host form's camelCase keys when (de)serialised.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ClinicConfig {
    /// Arrival horizon.  No patient arrives at or after this instant.
    pub duration_minutes: Minutes,
    /// Mean of the exponential inter-arrival gap.
    pub avg_arrival_interval: Minutes,
    /// Probability that an AI-clinic patient checked in digitally and skips
    /// the kiosk.
    pub digital_adoption_rate: f64,

    pub num_std_receptionists: u32,
    pub num_std_doctors: u32,
    pub num_kiosks: u32,
    pub num_triage_nurses: u32,
    pub num_ai_doctors: u32,

    pub std_reception_time_avg: Minutes,
    pub standard_doctor_time_avg: Minutes,
    pub kiosk_time_avg: Minutes,
    pub triage_time_avg: Minutes,
    pub ai_doctor_time_avg: Minutes,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            duration_minutes:         480.0,
            avg_arrival_interval:     5.0,
            digital_adoption_rate:    0.5,
            num_std_receptionists:    2,
            num_std_doctors:          3,
            num_kiosks:               2,
            num_triage_nurses:        2,
            num_ai_doctors:           2,
            std_reception_time_avg:   3.0,
            standard_doctor_time_avg: 15.0,
            kiosk_time_avg:           2.0,
            triage_time_avg:          5.0,
            ai_doctor_time_avg:       8.0,
        }
    }
}

impl ClinicConfig {
    /// Number of parallel service units at `station`.
    pub fn capacity(&self, station: StationId) -> u32 {
        match station {
            StationId::Reception      => self.num_std_receptionists,
            StationId::StandardDoctor => self.num_std_doctors,
            StationId::Kiosk          => self.num_kiosks,
            StationId::Triage         => self.num_triage_nurses,
            StationId::AiDoctor       => self.num_ai_doctors,
        }
    }

    /// Mean service duration at `station`.
    pub fn mean_service_time(&self, station: StationId) -> Minutes {
        match station {
            StationId::Reception      => self.std_reception_time_avg,
            StationId::StandardDoctor => self.standard_doctor_time_avg,
            StationId::Kiosk          => self.kiosk_time_avg,
            StationId::Triage         => self.triage_time_avg,
            StationId::AiDoctor       => self.ai_doctor_time_avg,
        }
    }

    /// Arrival rate (patients per minute per clinic).
    #[inline]
    pub fn arrival_rate(&self) -> f64 {
        1.0 / self.avg_arrival_interval
    }

    /// Reject configurations the engines cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        positive("durationMinutes", self.duration_minutes)?;
        positive("avgArrivalInterval", self.avg_arrival_interval)?;
        let rate = self.arrival_rate();
        if !(rate.is_finite() && rate > 0.0) {
            return Err(invalid("avgArrivalInterval", format!("gives unusable arrival rate {rate}")));
        }
        if !(0.0..=1.0).contains(&self.digital_adoption_rate) {
            return Err(invalid(
                "digitalAdoptionRate",
                format!("must be within [0, 1], got {}", self.digital_adoption_rate),
            ));
        }
        for station in StationId::ALL {
            if self.capacity(station) == 0 {
                return Err(invalid(capacity_field(station), "must be at least 1".to_string()));
            }
            positive(mean_field(station), self.mean_service_time(station))?;
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn invalid(field: &'static str, reason: String) -> CoreError {
    CoreError::InvalidConfiguration { field, reason }
}

fn positive(field: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive finite number, got {value}")))
    }
}

fn capacity_field(station: StationId) -> &'static str {
    match station {
        StationId::Reception      => "numStdReceptionists",
        StationId::StandardDoctor => "numStdDoctors",
        StationId::Kiosk          => "numKiosks",
        StationId::Triage         => "numTriageNurses",
        StationId::AiDoctor       => "numAiDoctors",
    }
}

fn mean_field(station: StationId) -> &'static str {
    match station {
        StationId::Reception      => "stdReceptionTimeAvg",
        StationId::StandardDoctor => "standardDoctorTimeAvg",
        StationId::Kiosk          => "kioskTimeAvg",
        StationId::Triage         => "triageTimeAvg",
        StationId::AiDoctor       => "aiDoctorTimeAvg",
    }
}
