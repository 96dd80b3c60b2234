//! Unit tests for pf-batch.

use pf_core::{ClinicConfig, SimRng};

use crate::{BatchEngine, BatchReport};

fn run(config: ClinicConfig, seed: u64) -> (BatchEngine, BatchReport) {
    let mut engine = BatchEngine::new(config, SimRng::new(seed)).unwrap();
    let report = engine.run().unwrap();
    (engine, report)
}

#[cfg(test)]
mod event_queue {
    use pf_core::{ClinicKind, PatientId, StationId};
    use pf_flow::Stage;

    use crate::{Event, EventKind, EventQueue};

    fn ev(time: f64, patient: u32) -> Event {
        Event {
            time,
            kind: EventKind::Arrival,
            clinic: ClinicKind::Standard,
            patient: PatientId(patient),
            stage: Stage::Visit(StationId::Reception),
        }
    }

    #[test]
    fn pops_earliest_first() {
        let mut q = EventQueue::new();
        for (t, p) in [(5.0, 0), (1.0, 1), (3.0, 2), (0.5, 3)] {
            q.push(ev(t, p));
        }
        assert_eq!(q.len(), 4);
        assert_eq!(q.peek_time(), Some(0.5));
        let order: Vec<u32> = std::iter::from_fn(|| q.pop()).map(|e| e.patient.0).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_times_pop_in_scheduling_order() {
        let mut q = EventQueue::new();
        for p in 0..50 {
            q.push(ev(2.0, p));
        }
        let order: Vec<u32> = std::iter::from_fn(|| q.pop()).map(|e| e.patient.0).collect();
        assert_eq!(order, (0..50).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod engine {
    use pf_core::{ClinicKind, CoreError, PatientId, StationId};
    use pf_flow::PatientClass;

    use super::*;
    use crate::{BatchError, PatientRecord};

    #[test]
    fn rejects_invalid_config() {
        let config = ClinicConfig { avg_arrival_interval: 0.0, ..ClinicConfig::default() };
        let err = BatchEngine::new(config, SimRng::new(1)).err().unwrap();
        assert!(matches!(err, BatchError::Config(CoreError::InvalidConfiguration { .. })));
    }

    #[test]
    fn both_clinics_see_the_same_arrivals() {
        let (_, report) = run(ClinicConfig::default(), 3);
        assert!(report.standard.arrivals > 0);
        assert_eq!(report.standard.arrivals, report.ai.arrivals);
        assert_eq!(report.standard.class_count(PatientClass::Standard), report.standard.arrivals);
        assert_eq!(
            report.ai.class_count(PatientClass::AiWalkIn) + report.ai.class_count(PatientClass::AiDigital),
            report.ai.arrivals,
        );
    }

    #[test]
    fn every_patient_exits_and_stay_is_wait_plus_service() {
        let (engine, report) = run(ClinicConfig::default(), 4);
        let records = engine.records();
        assert_eq!(records.len() as u64, report.standard.arrivals + report.ai.arrivals);
        for r in records {
            let exit = r.exit.unwrap();
            assert!(exit >= r.arrival);
            let los = r.length_of_stay().unwrap();
            assert!((los - (r.wait + r.service)).abs() < 1e-9 * los.max(1.0));
        }
        assert!(report.standard.throughput <= report.standard.arrivals);
        assert!(report.events_processed > 0);
    }

    #[test]
    fn records_are_ordered_and_addressable() {
        let (engine, _) = run(ClinicConfig::default(), 5);
        let records = engine.records();
        for w in records.windows(2) {
            assert!((w[0].class.clinic(), w[0].id) < (w[1].class.clinic(), w[1].id));
        }
        let first = records[0];
        assert_eq!(engine.record(first.class.clinic(), first.id).unwrap(), first);
        assert!(matches!(
            engine.record(ClinicKind::AiEnabled, PatientId(u32::MAX)),
            Err(BatchError::UnknownPatient { .. })
        ));
    }

    #[test]
    fn same_seed_same_report() {
        let (_, a) = run(ClinicConfig::default(), 9);
        let (_, b) = run(ClinicConfig::default(), 9);
        assert_eq!(a, b);
    }

    #[test]
    fn second_run_only_reaggregates() {
        let mut engine = BatchEngine::new(ClinicConfig::default(), SimRng::new(6)).unwrap();
        let first = engine.run().unwrap();
        let second = engine.run().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_adoption_has_no_digital_patients() {
        let config = ClinicConfig { digital_adoption_rate: 0.0, ..ClinicConfig::default() };
        let (_, report) = run(config, 7);
        assert_eq!(report.ai.class_count(PatientClass::AiDigital), 0);
        assert!(report.ai.station(StationId::Kiosk).unwrap().completed > 0);
    }

    #[test]
    fn full_adoption_never_uses_kiosk() {
        let config = ClinicConfig { digital_adoption_rate: 1.0, ..ClinicConfig::default() };
        let (engine, report) = run(config, 8);
        assert_eq!(report.ai.class_count(PatientClass::AiWalkIn), 0);
        assert_eq!(report.ai.station(StationId::Kiosk).unwrap().completed, 0);
        assert_eq!(engine.pool(StationId::Kiosk).total_busy_time(), 0.0);
    }

    #[test]
    fn stuck_doctor_completes_nothing_upstream_unaffected() {
        let config = ClinicConfig { standard_doctor_time_avg: 1.0e6, ..ClinicConfig::default() };
        let (engine, report) = run(config, 10);
        let std = &report.standard;

        assert_eq!(std.station(StationId::StandardDoctor).unwrap().completed, 0);
        assert_eq!(std.throughput, 0);
        assert!(std.station(StationId::Reception).unwrap().completed > std.arrivals / 2);
        assert_eq!(std.doctor_utilization_percent, 100.0);
        assert!(report.ai.throughput > 0);

        // Everyone behind the three occupied doctors is stuck for the
        // length of a full service.
        let stuck = engine
            .records()
            .into_iter()
            .filter(|r| r.class == PatientClass::Standard && r.wait > 1.0e5)
            .count() as u64;
        assert_eq!(stuck, std.arrivals.saturating_sub(3));
    }

    #[test]
    fn no_arrivals_means_empty_report() {
        let config = ClinicConfig {
            duration_minutes: 60.0,
            avg_arrival_interval: 1.0e12,
            ..ClinicConfig::default()
        };
        let (engine, report) = run(config, 11);
        assert!(engine.records().is_empty());
        for clinic in ClinicKind::ALL {
            let c = report.clinic(clinic);
            assert_eq!(c.arrivals, 0);
            assert_eq!(c.throughput, 0);
            assert_eq!(c.avg_length_of_stay, 0.0);
            assert_eq!(c.doctor_utilization_percent, 0.0);
        }
    }

    #[test]
    fn overload_caps_utilization() {
        let config = ClinicConfig {
            avg_arrival_interval: 0.5,
            num_std_doctors: 1,
            num_ai_doctors: 1,
            ..ClinicConfig::default()
        };
        let (_, report) = run(config, 12);
        for clinic in ClinicKind::ALL {
            let c = report.clinic(clinic);
            assert!(c.doctor_utilization_percent > 95.0);
            assert!(c.doctor_utilization_percent <= 100.0);
            for s in &c.station_utilization {
                assert!((0.0..=100.0).contains(&s.utilization_percent));
            }
        }
    }

    #[test]
    fn exit_on_the_horizon_still_counts() {
        let mut r = PatientRecord::new(PatientId(1), PatientClass::Standard, 470.0);
        assert!(!r.exited_by(480.0));
        r.exit = Some(480.0);
        assert!(r.exited_by(480.0));
        assert!(!r.exited_by(479.9));
        assert_eq!(r.length_of_stay(), Some(10.0));
    }

    #[test]
    fn throughput_counts_only_exits_by_horizon() {
        let config = ClinicConfig {
            avg_arrival_interval: 0.5,
            num_std_doctors: 1,
            ..ClinicConfig::default()
        };
        let horizon = config.duration_minutes;
        let (engine, report) = run(config, 14);
        let on_time = engine
            .records()
            .iter()
            .filter(|r| r.class == PatientClass::Standard && r.exited_by(horizon))
            .count() as u64;
        assert_eq!(report.standard.throughput, on_time);
        assert!(report.standard.throughput < report.standard.arrivals);
    }

    #[test]
    fn station_utilization_follows_routing_order() {
        let (_, report) = run(ClinicConfig::default(), 13);
        let std: Vec<_> = report.standard.station_utilization.iter().map(|s| s.station).collect();
        let ai: Vec<_> = report.ai.station_utilization.iter().map(|s| s.station).collect();
        assert_eq!(std, ClinicKind::Standard.stations());
        assert_eq!(ai, ClinicKind::AiEnabled.stations());
        assert_eq!(report.standard.station_utilization[0].capacity, 2);
    }
}

#[cfg(test)]
mod replication {
    use pf_core::ClinicConfig;

    use crate::{BatchError, replicate};

    /// Arrivals track duration / mean interval; throughput trails them by
    /// the patients still inside at the horizon.
    #[test]
    fn unsaturated_throughput_tracks_arrival_rate() {
        let config = ClinicConfig {
            duration_minutes: 60.0,
            avg_arrival_interval: 5.0,
            num_std_receptionists: 1,
            num_std_doctors: 1,
            std_reception_time_avg: 3.0,
            standard_doctor_time_avg: 5.0,
            ..ClinicConfig::default()
        };
        let summary = replicate(&config, 300, 2024).unwrap();
        assert_eq!(summary.runs, 300);
        assert!((11.0..=13.0).contains(&summary.standard.arrivals), "{}", summary.standard.arrivals);
        assert!(summary.standard.throughput <= summary.standard.arrivals);
        assert!((7.0..=12.0).contains(&summary.standard.throughput), "{}", summary.standard.throughput);
        assert_eq!(summary.standard.arrivals, summary.ai.arrivals);
    }

    #[test]
    fn replication_is_seeded() {
        let config = ClinicConfig::default();
        assert_eq!(replicate(&config, 8, 1).unwrap(), replicate(&config, 8, 1).unwrap());
    }

    #[test]
    fn zero_runs_rejected() {
        assert!(matches!(replicate(&ClinicConfig::default(), 0, 1), Err(BatchError::NoReplications)));
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use pf_core::{ClinicConfig, ClinicKind};

    use super::run;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Stay equals wait plus service for every patient, and utilisation
        /// stays within [0, 100], for arbitrary staffing and load.
        #[test]
        fn stay_and_utilization_hold(
            seed in any::<u64>(),
            interval in 0.5f64..10.0,
            adoption in 0.0f64..=1.0,
            caps in prop::array::uniform5(1u32..4),
        ) {
            let config = ClinicConfig {
                duration_minutes: 120.0,
                avg_arrival_interval: interval,
                digital_adoption_rate: adoption,
                num_std_receptionists: caps[0],
                num_std_doctors: caps[1],
                num_kiosks: caps[2],
                num_triage_nurses: caps[3],
                num_ai_doctors: caps[4],
                ..ClinicConfig::default()
            };
            let (engine, report) = run(config, seed);
            for r in engine.records() {
                let los = r.length_of_stay().unwrap();
                prop_assert!(los >= 0.0);
                prop_assert!((los - (r.wait + r.service)).abs() < 1e-9 * los.max(1.0));
            }
            for clinic in ClinicKind::ALL {
                let c = report.clinic(clinic);
                prop_assert!((0.0..=100.0).contains(&c.doctor_utilization_percent));
                prop_assert!(c.throughput <= c.arrivals);
            }
        }
    }
}
