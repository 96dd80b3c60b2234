//! The `LiveEngine` struct and its step loop.

use log::{debug, trace};

use pf_core::{ClinicConfig, ClinicKind, Minutes, SimClock, SimRng, StationId};
use pf_flow::{ArrivalProcess, JointArrival, PatientClass, Stage, first_stage, next_stage};
use pf_station::QueueStation;

use crate::stats::ClinicTally;
use crate::{
    Agent, AgentState, HISTORY_INTERVAL, HistorySample, Layout, LiveError, LiveObserver,
    LiveResult, LiveSnapshot, LiveStats, NoopObserver, PatientView, RoomView, WALK_SPEED,
};

/// The continuously stepped engine.
///
/// Owns every agent and station exclusively.  Borrowed accessors cannot
/// outlive the next `update`; use [`snapshot`][Self::snapshot] to keep a
/// copy across ticks.
///
/// Create via [`LiveEngineBuilder`][crate::LiveEngineBuilder].
pub struct LiveEngine {
    config:   ClinicConfig,
    layout:   Layout,
    clock:    SimClock,
    rng:      SimRng,
    arrivals: ArrivalProcess,
    /// Indexed by `StationId::index()`.
    stations: [QueueStation; StationId::COUNT],
    /// Live set, in spawn (ascending id) order.
    agents:   Vec<Agent>,

    history:     Vec<HistorySample>,
    last_sample: Minutes,

    /// Indexed by `PatientClass::index()`.
    spawned:  [u64; 3],
    finished: [u64; 3],
    standard: ClinicTally,
    ai:       ClinicTally,
}

impl LiveEngine {
    /// Shorthand for `LiveEngineBuilder::new(config).rng(rng).build()`.
    pub fn new(config: ClinicConfig, rng: SimRng) -> LiveResult<Self> {
        crate::LiveEngineBuilder::new(config).rng(rng).build()
    }

    pub(crate) fn from_parts(config: ClinicConfig, layout: Layout, mut rng: SimRng) -> Self {
        let arrivals = ArrivalProcess::new(&config, &mut rng);
        let stations = StationId::ALL.map(|id| QueueStation::from_config(id, &config));
        Self {
            config,
            layout,
            clock: SimClock::new(),
            rng,
            arrivals,
            stations,
            agents: Vec::new(),
            history: Vec::new(),
            last_sample: 0.0,
            spawned: [0; 3],
            finished: [0; 3],
            standard: ClinicTally::default(),
            ai: ClinicTally::default(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance by `dt` simulated minutes.
    pub fn update(&mut self, dt: Minutes) -> LiveResult<()> {
        self.update_observed(dt, &mut NoopObserver)
    }

    /// Advance by `dt` simulated minutes, reporting to `observer`.
    ///
    /// Any `dt` is accepted: zero changes nothing time-dependent, and a huge
    /// delta spawns every arrival instant it spans, in order.
    ///
    /// # Errors
    ///
    /// Only on a station or routing invariant violation, which aborts the
    /// step.
    pub fn update_observed<O: LiveObserver>(&mut self, dt: Minutes, observer: &mut O) -> LiveResult<()> {
        let before = self.clock.now();
        let now = self.clock.advance(dt);

        // Busy time accrues at the level held over the elapsed interval.
        let elapsed = now - before;
        for station in &mut self.stations {
            station.accumulate(elapsed);
        }

        while let Some(arrival) = self.arrivals.pop_due(now, &mut self.rng) {
            self.spawn(arrival);
        }

        let Self { agents, stations, rng, layout, .. } = self;
        for agent in agents.iter_mut() {
            step_agent(agent, now, stations, layout, rng)?;
        }

        self.retire_completed(observer);
        self.sample_history(observer);
        observer.on_step_end(now);
        Ok(())
    }

    /// Step with a fixed `frame_dt` until every arrival has spawned and every
    /// agent has left.  Returns the final clock time.
    pub fn drive<O: LiveObserver>(&mut self, frame_dt: Minutes, observer: &mut O) -> LiveResult<Minutes> {
        if !(frame_dt.is_finite() && frame_dt > 0.0) {
            return Err(LiveError::InvalidFrame(frame_dt));
        }
        while !self.is_finished() {
            self.update_observed(frame_dt, observer)?;
        }
        let end = self.clock.now();
        debug!("live engine drained at {}", self.clock);
        observer.on_finish(end);
        Ok(end)
    }

    /// `true` once the arrival stream is exhausted and the live set is empty.
    pub fn is_finished(&self) -> bool {
        self.arrivals.peek_next().is_none() && self.agents.is_empty()
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn time(&self) -> Minutes {
        self.clock.now()
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Live agents in ascending id order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn stations(&self) -> &[QueueStation] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> &QueueStation {
        &self.stations[id.index()]
    }

    pub fn history(&self) -> &[HistorySample] {
        &self.history
    }

    /// Joint arrivals spawned so far.
    pub fn joint_arrivals(&self) -> u64 {
        self.arrivals.spawned()
    }

    pub fn stats(&self) -> LiveStats {
        let now = self.clock.now();
        LiveStats {
            time:        now,
            spawned:     self.spawned,
            finished:    self.finished,
            handled:     StationId::ALL.map(|s| self.station(s).handled()),
            utilization: StationId::ALL.map(|s| self.station(s).utilization_percent(now)),
            in_system:   self.agents.len(),
            standard:    self.standard,
            ai:          self.ai,
        }
    }

    /// An owned copy of everything the host renders.
    pub fn snapshot(&self) -> LiveSnapshot {
        LiveSnapshot {
            time:     self.clock.now(),
            patients: self.agents.iter().map(PatientView::from).collect(),
            rooms:    self.stations.iter().map(room_view).collect(),
            history:  self.history.clone(),
            stats:    self.stats(),
        }
    }

    // ── Step phases ───────────────────────────────────────────────────────

    fn spawn(&mut self, arrival: JointArrival) {
        debug!(
            "joint arrival at t={:.2}: {} standard, {} {}",
            arrival.time, arrival.standard, arrival.ai, arrival.ai_class,
        );
        for (id, class) in [
            (arrival.standard, PatientClass::Standard),
            (arrival.ai, arrival.ai_class),
        ] {
            let entry = self.layout.entry(class.clinic());
            self.agents.push(Agent::spawn(id, class, arrival.time, entry, first_stage(class)));
            self.spawned[class.index()] += 1;
        }
    }

    fn retire_completed<O: LiveObserver>(&mut self, observer: &mut O) {
        let Self { agents, finished, standard, ai, .. } = self;
        agents.retain(|agent| {
            if !agent.is_completed() {
                return true;
            }
            finished[agent.class.index()] += 1;
            match agent.class.clinic() {
                ClinicKind::Standard  => standard.record(agent),
                ClinicKind::AiEnabled => ai.record(agent),
            }
            observer.on_patient_completed(agent);
            false
        });
    }

    fn sample_history<O: LiveObserver>(&mut self, observer: &mut O) {
        let now = self.clock.now();
        if now - self.last_sample < HISTORY_INTERVAL {
            return;
        }
        let sample = self.history_sample();
        self.history.push(sample);
        self.last_sample = now;
        debug!(
            "history t={now:.1}: finished {}/{}, waiting {}/{}",
            sample.finished_standard, sample.finished_ai, sample.waiting_standard, sample.waiting_ai,
        );
        observer.on_history_sample(&sample);
    }

    fn history_sample(&self) -> HistorySample {
        let now = self.clock.now();
        let waiting = |clinic: ClinicKind| -> u64 {
            clinic.stations().iter().map(|&s| self.station(s).queue().len() as u64).sum()
        };
        HistorySample {
            time: now,
            finished_standard: self.finished[PatientClass::Standard.index()],
            finished_ai: self.finished[PatientClass::AiWalkIn.index()]
                + self.finished[PatientClass::AiDigital.index()],
            waiting_standard: waiting(ClinicKind::Standard),
            waiting_ai: waiting(ClinicKind::AiEnabled),
            standard_doctor_utilization: self.station(StationId::StandardDoctor).utilization_percent(now),
            ai_doctor_utilization: self.station(StationId::AiDoctor).utilization_percent(now),
        }
    }
}

// ── Per-agent state machine ───────────────────────────────────────────────────

/// Evaluate `agent`'s current state once at `now`.
fn step_agent(
    agent:    &mut Agent,
    now:      Minutes,
    stations: &mut [QueueStation; StationId::COUNT],
    layout:   &Layout,
    rng:      &mut SimRng,
) -> LiveResult<()> {
    let elapsed = (now - agent.local_time).max(0.0);
    agent.local_time = now;

    match (agent.state, agent.target) {
        (AgentState::Moving, target) => {
            let waypoint = layout.waypoint(agent.class.clinic(), target);
            let (position, arrived) = agent.position.step_toward(waypoint, WALK_SPEED * elapsed);
            agent.position = position;
            if !arrived {
                return Ok(());
            }
            match target {
                Stage::Visit(station) => {
                    stations[station.index()].enqueue(agent.id)?;
                    agent.state = AgentState::Waiting;
                    agent.waiting_since = now;
                    trace!("{} queued at {}", agent.id, station.queue_label());
                }
                Stage::Exit => {
                    agent.state = AgentState::Completed;
                    agent.exit_time = Some(now);
                    trace!("{} left at t={now:.2}", agent.id);
                }
            }
        }

        (AgentState::Waiting, Stage::Visit(station)) => {
            if let Some(duration) = stations[station.index()].try_admit(agent.id, rng) {
                agent.wait_time += now - agent.waiting_since;
                agent.state = AgentState::Processing;
                agent.processing_since = now;
                agent.processing_duration = duration;
                agent.position = layout.service_point(station);
            }
        }

        (AgentState::Processing, Stage::Visit(station)) => {
            if now >= agent.processing_ends_at() {
                stations[station.index()].release(agent.id)?;
                agent.service_time += agent.processing_duration;
                agent.target = next_stage(agent.class, station)?;
                agent.state = AgentState::Moving;
                trace!("{} done at {station}, heading to {}", agent.id, agent.target);
            }
        }

        // Waiting / processing always target a station; completed agents
        // are removed before the next step.
        (AgentState::Waiting | AgentState::Processing, Stage::Exit) | (AgentState::Completed, _) => {}
    }
    Ok(())
}

fn room_view(station: &QueueStation) -> RoomView {
    RoomView {
        id:          station.id(),
        queue_label: station.id().queue_label(),
        capacity:    station.capacity(),
        staff_busy:  station.busy(),
        queue:       station.queue().iter().copied().collect(),
        occupants:   station.occupants().to_vec(),
        handled:     station.handled(),
    }
}
