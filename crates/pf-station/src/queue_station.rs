//! Tick-mode station: an explicit FIFO queue in front of `capacity` units.

use std::collections::VecDeque;

use log::trace;

use pf_core::{ClinicConfig, Minutes, PatientId, SimRng, StationId};

use crate::{ServiceModel, StationError, StationResult};

#[cfg(feature = "fx-hash")]
type MemberSet = rustc_hash::FxHashSet<PatientId>;
#[cfg(not(feature = "fx-hash"))]
type MemberSet = std::collections::HashSet<PatientId>;

/// A service point as seen by the live engine.
///
/// Patients join `queue` when they reach the waiting area and leave it only
/// through [`try_admit`][Self::try_admit], which admits the queue head and
/// nobody else.  `busy <= capacity` holds after every operation.
#[derive(Clone, Debug)]
pub struct QueueStation {
    id:        StationId,
    capacity:  u32,
    busy:      u32,
    queue:     VecDeque<PatientId>,
    /// Patients currently in service, in admission order.
    occupants: Vec<PatientId>,
    /// Everyone queued or in service, for O(1) duplicate checks.
    members:   MemberSet,
    model:     ServiceModel,
    handled:   u64,
    /// Σ (busy / capacity) · dt over every accumulated step.
    weighted_busy: Minutes,
}

impl QueueStation {
    pub fn new(id: StationId, capacity: u32, model: ServiceModel) -> Self {
        Self {
            id,
            capacity,
            busy: 0,
            queue: VecDeque::new(),
            occupants: Vec::with_capacity(capacity as usize),
            members: MemberSet::default(),
            model,
            handled: 0,
            weighted_busy: 0.0,
        }
    }

    /// Build the station for `id` from a validated config.
    pub fn from_config(id: StationId, config: &ClinicConfig) -> Self {
        Self::new(id, config.capacity(id), ServiceModel::for_station(id, config))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> StationId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units currently serving a patient.
    #[inline]
    pub fn busy(&self) -> u32 {
        self.busy
    }

    #[inline]
    pub fn has_free_unit(&self) -> bool {
        self.busy < self.capacity
    }

    /// Waiting patients, head first.
    #[inline]
    pub fn queue(&self) -> &VecDeque<PatientId> {
        &self.queue
    }

    #[inline]
    pub fn head(&self) -> Option<PatientId> {
        self.queue.front().copied()
    }

    #[inline]
    pub fn occupants(&self) -> &[PatientId] {
        &self.occupants
    }

    /// Completed services.
    #[inline]
    pub fn handled(&self) -> u64 {
        self.handled
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Append `patient` to the back of the queue.
    pub fn enqueue(&mut self, patient: PatientId) -> StationResult<()> {
        if !self.members.insert(patient) {
            return Err(StationError::AlreadyQueued { station: self.id, patient });
        }
        self.queue.push_back(patient);
        Ok(())
    }

    /// Admit `patient` if it heads the queue and a unit is free.
    ///
    /// On success the patient moves from the queue into service and the
    /// sampled service duration is returned.
    pub fn try_admit(&mut self, patient: PatientId, rng: &mut SimRng) -> Option<Minutes> {
        if self.head() != Some(patient) || !self.has_free_unit() {
            return None;
        }
        self.queue.pop_front();
        self.busy += 1;
        self.occupants.push(patient);
        let duration = self.model.sample(rng);
        trace!("{}: admitted {patient} for {duration:.2} min", self.id);
        Some(duration)
    }

    /// Free the unit serving `patient` and count the service as handled.
    pub fn release(&mut self, patient: PatientId) -> StationResult<()> {
        let pos = self
            .occupants
            .iter()
            .position(|&p| p == patient)
            .ok_or(StationError::NotOccupant { station: self.id, patient })?;
        self.occupants.remove(pos);
        self.members.remove(&patient);
        self.busy -= 1;
        self.handled += 1;
        Ok(())
    }

    /// Accrue `dt` minutes at the current busy level.
    #[inline]
    pub fn accumulate(&mut self, dt: Minutes) {
        if dt > 0.0 {
            self.weighted_busy += self.busy as f64 / self.capacity as f64 * dt;
        }
    }

    /// Share of `elapsed` the units were busy, in percent, within [0, 100].
    pub fn utilization_percent(&self, elapsed: Minutes) -> f64 {
        if elapsed <= 0.0 {
            return 0.0;
        }
        (self.weighted_busy / elapsed * 100.0).clamp(0.0, 100.0)
    }
}
