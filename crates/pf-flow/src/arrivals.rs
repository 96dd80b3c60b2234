//! The synchronised arrival process shared by both engines.
//!
//! A single exponential inter-arrival draw produces a *joint arrival*: one
//! Standard patient and one AI patient spawn at the same instant.  Feeding
//! both clinics the same arrival stream removes sampling-volume variance from
//! the comparison.
//!
//! The live engine pulls arrivals with [`ArrivalProcess::pop_due`] in a
//! catch-up loop; the batch engine drains the whole stream up front with
//! [`ArrivalProcess::collect_all`].

use log::debug;

use pf_core::variates::exponential;
use pf_core::{ClinicConfig, Minutes, PatientId, SimRng};

use crate::PatientClass;

/// Forced forward step when a drawn gap would not advance time.
pub const MIN_ARRIVAL_STEP: Minutes = 1e-3;

/// One sampled instant at which both clinics receive a patient.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JointArrival {
    pub time: Minutes,
    /// The Standard-clinic patient.
    pub standard: PatientId,
    /// The AI-clinic patient and its check-in path.
    pub ai:       PatientId,
    pub ai_class: PatientClass,
}

/// Generator of joint arrivals up to (excluding) the horizon.
#[derive(Clone, Debug)]
pub struct ArrivalProcess {
    rate:          f64,
    horizon:       Minutes,
    adoption_rate: f64,
    next_time:     Minutes,
    next_id:       PatientId,
    spawned:       u64,
}

impl ArrivalProcess {
    /// Build the process and draw the first arrival instant.
    ///
    /// `config` is assumed validated.
    pub fn new(config: &ClinicConfig, rng: &mut SimRng) -> Self {
        let rate = config.arrival_rate();
        let first = exponential(rng, rate).max(MIN_ARRIVAL_STEP);
        Self {
            rate,
            horizon:       config.duration_minutes,
            adoption_rate: config.digital_adoption_rate,
            next_time:     first,
            next_id:       PatientId(0),
            spawned:       0,
        }
    }

    /// The instant of the next joint arrival, or `None` once past the horizon.
    #[inline]
    pub fn peek_next(&self) -> Option<Minutes> {
        (self.next_time < self.horizon).then_some(self.next_time)
    }

    /// Number of joint arrivals produced so far.
    #[inline]
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Pop the next joint arrival if it falls at or before `now` and inside
    /// the horizon.
    ///
    /// Call in a `while let` loop to catch up over a large time step; each
    /// instant is produced exactly once, in order.
    pub fn pop_due(&mut self, now: Minutes, rng: &mut SimRng) -> Option<JointArrival> {
        let time = self.peek_next()?;
        if time > now {
            return None;
        }

        let standard = self.take_id();
        let ai = self.take_id();
        let ai_class = PatientClass::ai(rng.gen_bool(self.adoption_rate));
        self.spawned += 1;

        let gap = exponential(rng, self.rate);
        let next = time + gap;
        self.next_time = if next > time {
            next
        } else {
            debug!("arrival gap {gap} does not advance time at t={time:.3}; forcing minimum step");
            time + MIN_ARRIVAL_STEP
        };

        Some(JointArrival { time, standard, ai, ai_class })
    }

    /// Drain every remaining arrival before the horizon.
    pub fn collect_all(&mut self, rng: &mut SimRng) -> Vec<JointArrival> {
        let mut out = Vec::new();
        while let Some(a) = self.pop_due(f64::INFINITY, rng) {
            out.push(a);
        }
        out
    }

    fn take_id(&mut self) -> PatientId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}
