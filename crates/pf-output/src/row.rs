//! Plain data row types written by output backends.

use pf_batch::{BatchReport, PatientRecord};
use pf_core::{ClinicKind, Minutes};
use pf_live::HistorySample;

/// One live-engine history sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRow {
    pub time:                        Minutes,
    pub finished_standard:           u64,
    pub finished_ai:                 u64,
    pub waiting_standard:            u64,
    pub waiting_ai:                  u64,
    pub standard_doctor_utilization: f64,
    pub ai_doctor_utilization:       f64,
}

impl From<&HistorySample> for HistoryRow {
    fn from(s: &HistorySample) -> Self {
        Self {
            time:                        s.time,
            finished_standard:           s.finished_standard,
            finished_ai:                 s.finished_ai,
            waiting_standard:            s.waiting_standard,
            waiting_ai:                  s.waiting_ai,
            standard_doctor_utilization: s.standard_doctor_utilization,
            ai_doctor_utilization:       s.ai_doctor_utilization,
        }
    }
}

/// One `(clinic, metric, value)` triple of a batch report.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub clinic: &'static str,
    /// Plain metric name, or `utilization.<station>` per station.
    pub metric: String,
    pub value:  f64,
}

/// Flatten `report` into long-format rows, Standard clinic first.
pub fn summary_rows(report: &BatchReport) -> Vec<SummaryRow> {
    let mut rows = Vec::new();
    for clinic in ClinicKind::ALL {
        let c = report.clinic(clinic);
        let name = clinic.as_str();
        let mut push = |metric: String, value: f64| rows.push(SummaryRow { clinic: name, metric, value });

        push("arrivals".into(), c.arrivals as f64);
        push("throughput".into(), c.throughput as f64);
        push("avg_length_of_stay".into(), c.avg_length_of_stay);
        push("avg_wait_time".into(), c.avg_wait_time);
        push("avg_service_time".into(), c.avg_service_time);
        push("doctor_utilization_percent".into(), c.doctor_utilization_percent);
        for s in &c.station_utilization {
            push(format!("utilization.{}", s.station), s.utilization_percent);
        }
    }
    rows
}

/// One batch patient.  Optional fields are written as empty cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatientRow {
    pub clinic:         &'static str,
    pub patient_id:     u32,
    pub class:          &'static str,
    pub arrival:        Minutes,
    pub exit:           Option<Minutes>,
    pub wait:           Minutes,
    pub service:        Minutes,
    pub length_of_stay: Option<Minutes>,
}

impl From<&PatientRecord> for PatientRow {
    fn from(r: &PatientRecord) -> Self {
        Self {
            clinic:         r.class.clinic().as_str(),
            patient_id:     r.id.0,
            class:          r.class.as_str(),
            arrival:        r.arrival,
            exit:           r.exit,
            wait:           r.wait,
            service:        r.service,
            length_of_stay: r.length_of_stay(),
        }
    }
}

pub fn patient_rows<'a>(records: impl IntoIterator<Item = &'a PatientRecord>) -> Vec<PatientRow> {
    records.into_iter().map(PatientRow::from).collect()
}
