//! Monte-Carlo replication over independent batch runs.

use log::debug;

use pf_core::{ClinicConfig, ClinicKind, SimRng};

use crate::{BatchEngine, BatchError, BatchReport, BatchResult, ClinicReport};

/// Per-clinic means across replications.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClinicMeans {
    pub arrivals:                   f64,
    pub throughput:                 f64,
    pub avg_length_of_stay:         f64,
    pub avg_wait_time:              f64,
    pub avg_service_time:           f64,
    pub doctor_utilization_percent: f64,
}

impl ClinicMeans {
    fn of<'a>(reports: impl Iterator<Item = &'a ClinicReport>) -> Self {
        let mut m = ClinicMeans::default();
        let mut n = 0usize;
        for r in reports {
            n += 1;
            m.arrivals += r.arrivals as f64;
            m.throughput += r.throughput as f64;
            m.avg_length_of_stay += r.avg_length_of_stay;
            m.avg_wait_time += r.avg_wait_time;
            m.avg_service_time += r.avg_service_time;
            m.doctor_utilization_percent += r.doctor_utilization_percent;
        }
        if n > 0 {
            let n = n as f64;
            m.arrivals /= n;
            m.throughput /= n;
            m.avg_length_of_stay /= n;
            m.avg_wait_time /= n;
            m.avg_service_time /= n;
            m.doctor_utilization_percent /= n;
        }
        m
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplicationSummary {
    pub runs:     usize,
    pub standard: ClinicMeans,
    pub ai:       ClinicMeans,
}

impl ReplicationSummary {
    pub fn clinic(&self, clinic: ClinicKind) -> &ClinicMeans {
        match clinic {
            ClinicKind::Standard  => &self.standard,
            ClinicKind::AiEnabled => &self.ai,
        }
    }
}

/// Run `runs` independent batch engines, each on its own child stream of
/// `seed`, and average their reports.
///
/// The result is identical with or without the `parallel` feature.
pub fn replicate(config: &ClinicConfig, runs: usize, seed: u64) -> BatchResult<ReplicationSummary> {
    if runs == 0 {
        return Err(BatchError::NoReplications);
    }
    config.validate()?;

    let mut root = SimRng::new(seed);
    let streams: Vec<SimRng> = (0..runs as u64).map(|i| root.child(i)).collect();

    let run_one = |rng: SimRng| -> BatchResult<BatchReport> {
        BatchEngine::new(config.clone(), rng)?.run()
    };

    #[cfg(not(feature = "parallel"))]
    let reports: Vec<BatchReport> = streams.into_iter().map(run_one).collect::<BatchResult<_>>()?;

    #[cfg(feature = "parallel")]
    let reports: Vec<BatchReport> = {
        use rayon::prelude::*;
        streams.into_par_iter().map(run_one).collect::<BatchResult<_>>()?
    };

    debug!("replicated {runs} batch runs from seed {seed}");
    Ok(ReplicationSummary {
        runs,
        standard: ClinicMeans::of(reports.iter().map(|r| &r.standard)),
        ai:       ClinicMeans::of(reports.iter().map(|r| &r.ai)),
    })
}
