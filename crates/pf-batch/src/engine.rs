//! The `BatchEngine` struct and its event loop.

use log::{debug, trace};

use pf_core::{ClinicConfig, ClinicKind, Minutes, PatientId, SimClock, SimRng, StationId};
use pf_flow::{ArrivalProcess, PatientClass, Stage, first_stage, next_stage};
use pf_station::{ServiceModel, UnitPool};

use crate::{
    BatchError, BatchReport, BatchResult, ClinicReport, Event, EventKind, EventQueue,
    PatientRecord, StationUtilization,
};

#[cfg(feature = "fx-hash")]
type RecordMap = rustc_hash::FxHashMap<(ClinicKind, PatientId), PatientRecord>;
#[cfg(not(feature = "fx-hash"))]
type RecordMap = std::collections::HashMap<(ClinicKind, PatientId), PatientRecord>;

/// The discrete-event engine.
///
/// [`run`][Self::run] drains the full event list synchronously.  The record
/// table stays available afterwards through [`records`][Self::records].
pub struct BatchEngine {
    config:   ClinicConfig,
    clock:    SimClock,
    rng:      SimRng,
    arrivals: ArrivalProcess,
    queue:    EventQueue,
    /// Indexed by `StationId::index()`.
    pools:    [UnitPool; StationId::COUNT],
    models:   [ServiceModel; StationId::COUNT],
    /// Services finished within the horizon, by station.
    completed: [u64; StationId::COUNT],
    records:  RecordMap,
    events_processed: u64,
}

impl BatchEngine {
    /// Validate `config`, build one unit pool per station and draw the first
    /// arrival instant.
    pub fn new(config: ClinicConfig, mut rng: SimRng) -> BatchResult<Self> {
        config.validate()?;
        let arrivals = ArrivalProcess::new(&config, &mut rng);
        let pools = StationId::ALL.map(|id| UnitPool::new(id, config.capacity(id)));
        let models = StationId::ALL.map(|id| ServiceModel::for_station(id, &config));
        Ok(Self {
            config,
            clock: SimClock::new(),
            rng,
            arrivals,
            queue: EventQueue::new(),
            pools,
            models,
            completed: [0; StationId::COUNT],
            records: RecordMap::default(),
            events_processed: 0,
        })
    }

    /// Schedule every arrival, drain the event list and aggregate.
    ///
    /// Calling again after a completed run only re-aggregates.
    ///
    /// # Errors
    ///
    /// Only on a routing or record-table invariant violation.
    pub fn run(&mut self) -> BatchResult<BatchReport> {
        let stream = self.arrivals.collect_all(&mut self.rng);
        debug!("batch engine: {} joint arrivals before t={}", stream.len(), self.config.duration_minutes);

        for arrival in &stream {
            for (id, class) in [
                (arrival.standard, PatientClass::Standard),
                (arrival.ai, arrival.ai_class),
            ] {
                let clinic = class.clinic();
                self.records.insert((clinic, id), PatientRecord::new(id, class, arrival.time));
                self.queue.push(Event {
                    time:    arrival.time,
                    kind:    EventKind::Arrival,
                    clinic,
                    patient: id,
                    stage:   first_stage(class),
                });
            }
        }

        while let Some(event) = self.queue.pop() {
            self.clock.advance_to(event.time);
            self.events_processed += 1;
            trace!("t={:.3} {:?} {} {} -> {}", event.time, event.kind, event.clinic, event.patient, event.stage);
            self.dispatch(event)?;
        }

        debug!(
            "batch engine drained {} events, last at t={:.2}",
            self.events_processed,
            self.clock.now(),
        );
        Ok(self.report())
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    /// Time of the last processed event.
    pub fn time(&self) -> Minutes {
        self.clock.now()
    }

    pub fn pool(&self, station: StationId) -> &UnitPool {
        &self.pools[station.index()]
    }

    /// Every patient record, ordered by clinic then id.
    pub fn records(&self) -> Vec<&PatientRecord> {
        let mut out: Vec<_> = self.records.values().collect();
        out.sort_by_key(|r| (r.class.clinic(), r.id));
        out
    }

    pub fn record(&self, clinic: ClinicKind, id: PatientId) -> BatchResult<&PatientRecord> {
        self.records
            .get(&(clinic, id))
            .ok_or(BatchError::UnknownPatient { clinic, id })
    }

    // ── Event handling ────────────────────────────────────────────────────

    fn dispatch(&mut self, event: Event) -> BatchResult<()> {
        let now = event.time;
        if let EventKind::ServiceCompleted(station) = event.kind {
            if now <= self.config.duration_minutes {
                self.completed[station.index()] += 1;
            }
        }

        let record = self
            .records
            .get_mut(&(event.clinic, event.patient))
            .ok_or(BatchError::UnknownPatient { clinic: event.clinic, id: event.patient })?;

        match event.stage {
            Stage::Exit => {
                record.exit = Some(now);
            }
            Stage::Visit(station) => {
                let duration = self.models[station.index()].sample(&mut self.rng);
                let seizure = self.pools[station.index()].seize(now, duration);
                record.wait += seizure.wait;
                record.service += duration;
                self.queue.push(Event {
                    time:    seizure.finish,
                    kind:    EventKind::ServiceCompleted(station),
                    clinic:  event.clinic,
                    patient: event.patient,
                    stage:   next_stage(record.class, station)?,
                });
            }
        }
        Ok(())
    }

    // ── Aggregation ───────────────────────────────────────────────────────

    fn report(&self) -> BatchReport {
        BatchReport {
            duration:         self.config.duration_minutes,
            events_processed: self.events_processed,
            standard:         self.clinic_report(ClinicKind::Standard),
            ai:               self.clinic_report(ClinicKind::AiEnabled),
        }
    }

    fn clinic_report(&self, clinic: ClinicKind) -> ClinicReport {
        let horizon = self.config.duration_minutes;
        let mut report = ClinicReport::default();
        let (mut stay, mut wait, mut service) = (0.0, 0.0, 0.0);

        // Sorted so float sums do not depend on hash order.
        for record in self.records().into_iter().filter(|r| r.class.clinic() == clinic) {
            report.arrivals += 1;
            report.class_counts[record.class.index()] += 1;
            if let Some(los) = record.length_of_stay().filter(|_| record.exited_by(horizon)) {
                report.throughput += 1;
                stay += los;
                wait += record.wait;
                service += record.service;
            }
        }
        if report.throughput > 0 {
            let n = report.throughput as f64;
            report.avg_length_of_stay = stay / n;
            report.avg_wait_time = wait / n;
            report.avg_service_time = service / n;
        }

        report.station_utilization = clinic
            .stations()
            .iter()
            .map(|&station| {
                let pool = self.pool(station);
                StationUtilization {
                    station,
                    capacity: pool.capacity(),
                    completed: self.completed[station.index()],
                    utilization_percent: pool.utilization_percent(horizon),
                }
            })
            .collect();
        report.doctor_utilization_percent = self.pool(clinic.doctor()).utilization_percent(horizon);
        report
    }
}
