//! Integration tests for pf-live.

use pf_core::{ClinicConfig, SimRng};

use crate::{LiveEngine, LiveEngineBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn engine(config: ClinicConfig, seed: u64) -> LiveEngine {
    LiveEngineBuilder::new(config).rng(SimRng::new(seed)).build().unwrap()
}

/// Step with a fixed frame until the clock reaches `until`.
fn run_until(engine: &mut LiveEngine, frame: f64, until: f64) {
    while engine.time() < until {
        engine.update(frame).unwrap();
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use pf_core::{CoreError, StationId};

    use super::*;
    use crate::{Layout, LiveError};

    #[test]
    fn rejects_invalid_config() {
        let config = ClinicConfig { num_std_doctors: 0, ..ClinicConfig::default() };
        let err = LiveEngineBuilder::new(config).rng(SimRng::new(1)).build().err().unwrap();
        assert!(matches!(
            err,
            LiveError::Config(CoreError::InvalidConfiguration { field: "numStdDoctors", .. })
        ));
    }

    #[test]
    fn fresh_engine_is_empty() {
        let e = engine(ClinicConfig::default(), 1);
        assert_eq!(e.time(), 0.0);
        assert!(e.agents().is_empty());
        assert!(e.history().is_empty());
        assert_eq!(e.stations().len(), StationId::COUNT);
        assert_eq!(e.station(StationId::Triage).capacity(), 2);
        assert_eq!(e.layout(), &Layout::default_floor());
    }

    #[test]
    fn new_is_builder_shorthand() {
        let mut a = LiveEngine::new(ClinicConfig::default(), SimRng::new(5)).unwrap();
        let mut b = engine(ClinicConfig::default(), 5);
        a.update(60.0).unwrap();
        b.update(60.0).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

// ── Arrivals ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_tests {
    use pf_flow::{ArrivalProcess, PatientClass};

    use super::*;

    #[test]
    fn zero_dt_spawns_nothing() {
        let mut e = engine(ClinicConfig::default(), 3);
        e.update(0.0).unwrap();
        assert!(e.agents().is_empty());

        e.update(30.0).unwrap();
        let spawned = e.joint_arrivals();
        let in_system = e.agents().len();
        for _ in 0..10 {
            e.update(0.0).unwrap();
        }
        assert_eq!(e.time(), 30.0);
        assert_eq!(e.joint_arrivals(), spawned);
        assert_eq!(e.agents().len(), in_system);
    }

    #[test]
    fn negative_and_nan_dt_do_not_rewind() {
        let mut e = engine(ClinicConfig::default(), 3);
        e.update(12.0).unwrap();
        e.update(-5.0).unwrap();
        e.update(f64::NAN).unwrap();
        assert_eq!(e.time(), 12.0);
    }

    #[test]
    fn one_large_step_spawns_every_arrival_instant() {
        let config = ClinicConfig::default();
        let expected = {
            let mut rng = SimRng::new(11);
            ArrivalProcess::new(&config, &mut rng).collect_all(&mut rng)
        };

        let mut e = engine(config.clone(), 11);
        e.update(config.duration_minutes + 1.0).unwrap();

        assert_eq!(e.joint_arrivals(), expected.len() as u64);
        let stats = e.stats();
        assert_eq!(stats.spawned_of(PatientClass::Standard), expected.len() as u64);
        let digital = expected.iter().filter(|a| a.ai_class == PatientClass::AiDigital).count();
        assert_eq!(stats.spawned_of(PatientClass::AiDigital), digital as u64);
    }

    #[test]
    fn every_arrival_spawns_one_patient_per_clinic() {
        let mut e = engine(ClinicConfig::default(), 4);
        run_until(&mut e, 0.5, 120.0);
        let s = e.stats();
        let ai = s.spawned_of(PatientClass::AiWalkIn) + s.spawned_of(PatientClass::AiDigital);
        assert_eq!(s.spawned_of(PatientClass::Standard), ai);
        assert_eq!(ai, e.joint_arrivals());
    }

    #[test]
    fn nothing_spawns_after_horizon() {
        let config = ClinicConfig { duration_minutes: 60.0, ..ClinicConfig::default() };
        let mut e = engine(config, 6);
        run_until(&mut e, 1.0, 60.0);
        let spawned = e.joint_arrivals();
        run_until(&mut e, 1.0, 300.0);
        assert_eq!(e.joint_arrivals(), spawned);
    }

    #[test]
    fn full_adoption_skips_kiosk() {
        let config = ClinicConfig { digital_adoption_rate: 1.0, ..ClinicConfig::default() };
        let mut e = engine(config, 8);
        run_until(&mut e, 0.5, 240.0);
        let s = e.stats();
        assert_eq!(s.spawned_of(PatientClass::AiWalkIn), 0);
        assert_eq!(s.handled_at(pf_core::StationId::Kiosk), 0);
        assert!(s.handled_at(pf_core::StationId::Triage) > 0);
    }

    #[test]
    fn zero_adoption_has_no_digital_patients() {
        let config = ClinicConfig { digital_adoption_rate: 0.0, ..ClinicConfig::default() };
        let mut e = engine(config, 9);
        run_until(&mut e, 0.5, 240.0);
        let s = e.stats();
        assert_eq!(s.spawned_of(PatientClass::AiDigital), 0);
        assert!(s.handled_at(pf_core::StationId::Kiosk) > 0);
    }
}

// ── Stations ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod station_tests {
    use std::collections::HashSet;

    use pf_core::{ClinicKind, StationId};

    use super::*;
    use crate::AgentState;

    #[test]
    fn bookkeeping_holds_under_random_frames() {
        let mut e = engine(ClinicConfig::default(), 21);
        let mut frames = SimRng::new(99);
        while e.time() < 600.0 {
            e.update(frames.open01() * 3.0).unwrap();

            for station in e.stations() {
                assert!(station.busy() <= station.capacity());
                assert_eq!(station.occupants().len(), station.busy() as usize);
                let unique: HashSet<_> = station.queue().iter().collect();
                assert_eq!(unique.len(), station.queue().len());
            }
            for agent in e.agents() {
                let at = agent.current_station();
                match agent.state {
                    AgentState::Waiting => {
                        assert!(e.station(at.unwrap()).queue().contains(&agent.id));
                    }
                    AgentState::Processing => {
                        assert!(e.station(at.unwrap()).occupants().contains(&agent.id));
                    }
                    AgentState::Moving => assert!(at.is_none()),
                    AgentState::Completed => panic!("completed agent left in live set"),
                }
            }
            for clinic in ClinicKind::ALL {
                let u = e.stats().doctor_utilization(clinic);
                assert!((0.0..=100.0).contains(&u));
            }
        }
    }

    #[test]
    fn stuck_doctor_backs_up_main_wait() {
        let config = ClinicConfig { standard_doctor_time_avg: 1.0e6, ..ClinicConfig::default() };
        let mut e = engine(config, 13);
        run_until(&mut e, 1.0, 480.0);

        let doctor = e.station(StationId::StandardDoctor);
        assert_eq!(doctor.handled(), 0);
        assert_eq!(doctor.busy(), 3);
        assert!(doctor.queue().len() > 40, "main wait only {}", doctor.queue().len());
        assert!(e.station(StationId::Reception).handled() > 40);
        assert!(e.stats().doctor_utilization(ClinicKind::Standard) > 90.0);
        // The AI clinic is unaffected.
        assert!(e.station(StationId::AiDoctor).handled() > 40);
    }

    #[test]
    fn queues_are_served_in_order() {
        // One slow unit everywhere so queues form.
        let config = ClinicConfig {
            num_std_receptionists: 1,
            std_reception_time_avg: 6.0,
            ..ClinicConfig::default()
        };
        let mut e = engine(config, 17);
        let mut last_admitted = None;
        while e.time() < 300.0 {
            e.update(0.25).unwrap();
            if let Some(&current) = e.station(StationId::Reception).occupants().first() {
                if let Some(prev) = last_admitted {
                    assert!(current >= prev, "{current} admitted after {prev}");
                }
                last_admitted = Some(current);
            }
        }
    }
}

// ── Drive, history and observers ──────────────────────────────────────────────

#[cfg(test)]
mod drive_tests {
    use pf_core::{ClinicKind, Minutes};

    use super::*;
    use crate::{Agent, HISTORY_INTERVAL, HistorySample, LiveError, LiveObserver, NoopObserver};

    #[derive(Default)]
    struct Recorder {
        steps:     usize,
        samples:   Vec<HistorySample>,
        completed: Vec<Agent>,
        finished:  Option<Minutes>,
    }

    impl LiveObserver for Recorder {
        fn on_step_end(&mut self, _time: Minutes) {
            self.steps += 1;
        }
        fn on_history_sample(&mut self, sample: &HistorySample) {
            self.samples.push(*sample);
        }
        fn on_patient_completed(&mut self, agent: &Agent) {
            self.completed.push(agent.clone());
        }
        fn on_finish(&mut self, time: Minutes) {
            self.finished = Some(time);
        }
    }

    #[test]
    fn drive_rejects_bad_frames() {
        let mut e = engine(ClinicConfig::default(), 1);
        assert!(matches!(e.drive(0.0, &mut NoopObserver), Err(LiveError::InvalidFrame(_))));
        assert!(matches!(e.drive(-1.0, &mut NoopObserver), Err(LiveError::InvalidFrame(_))));
        assert!(matches!(e.drive(f64::NAN, &mut NoopObserver), Err(LiveError::InvalidFrame(_))));
    }

    #[test]
    fn drive_drains_every_patient() {
        let mut e = engine(ClinicConfig::default(), 2);
        let mut rec = Recorder::default();
        let end = e.drive(0.5, &mut rec).unwrap();

        assert!(e.is_finished());
        assert!(end >= e.config().duration_minutes);
        assert_eq!(rec.finished, Some(end));
        assert_eq!(rec.steps, (end / 0.5).round() as usize);

        let s = e.stats();
        assert_eq!(s.in_system, 0);
        assert_eq!(s.spawned, s.finished);
        assert_eq!(rec.completed.len() as u64, s.finished.iter().sum::<u64>());
        assert_eq!(
            s.tally(ClinicKind::Standard).completed + s.tally(ClinicKind::AiEnabled).completed,
            rec.completed.len() as u64,
        );
    }

    #[test]
    fn stay_covers_wait_and_service() {
        let mut e = engine(ClinicConfig::default(), 3);
        let mut rec = Recorder::default();
        e.drive(0.25, &mut rec).unwrap();
        assert!(!rec.completed.is_empty());
        for a in &rec.completed {
            let stay = a.length_of_stay().unwrap();
            assert!(a.wait_time >= 0.0);
            assert!(a.service_time > 0.0);
            assert!(stay + 1e-9 >= a.wait_time + a.service_time);
        }
    }

    #[test]
    fn history_samples_are_spaced() {
        let mut e = engine(ClinicConfig::default(), 4);
        let mut rec = Recorder::default();
        e.drive(0.7, &mut rec).unwrap();

        assert_eq!(rec.samples.as_slice(), e.history());
        assert!(!rec.samples.is_empty());
        assert!(rec.samples[0].time >= HISTORY_INTERVAL);
        for w in rec.samples.windows(2) {
            assert!(w[1].time - w[0].time >= HISTORY_INTERVAL - 1e-9);
            assert!(w[1].finished_standard >= w[0].finished_standard);
            assert!(w[1].finished_ai >= w[0].finished_ai);
        }
    }

    #[test]
    fn snapshot_is_detached_from_engine() {
        let mut e = engine(ClinicConfig::default(), 5);
        e.update(45.0).unwrap();
        let snap = e.snapshot();
        let kept = snap.clone();
        e.update(45.0).unwrap();

        assert_eq!(snap, kept);
        assert_eq!(snap.time, 45.0);
        assert_eq!(snap.rooms.len(), 5);
        assert_eq!(snap.patients.len(), snap.stats.in_system);
        assert_eq!(snap.rooms[1].queue_label, "main-wait");
        assert!(e.snapshot().time > snap.time);
    }

    #[test]
    fn same_seed_same_frames_is_deterministic() {
        let mut a = engine(ClinicConfig::default(), 77);
        let mut b = engine(ClinicConfig::default(), 77);
        run_until(&mut a, 0.4, 200.0);
        run_until(&mut b, 0.4, 200.0);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
