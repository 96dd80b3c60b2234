//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `history.csv`
//! - `batch_summary.csv`
//! - `patients.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{HistoryRow, OutputResult, PatientRow, SummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    history:  Writer<File>,
    summary:  Writer<File>,
    patients: Writer<File>,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut history = Writer::from_path(dir.join("history.csv"))?;
        history.write_record([
            "time",
            "finished_standard",
            "finished_ai",
            "waiting_standard",
            "waiting_ai",
            "standard_doctor_utilization",
            "ai_doctor_utilization",
        ])?;

        let mut summary = Writer::from_path(dir.join("batch_summary.csv"))?;
        summary.write_record(["clinic", "metric", "value"])?;

        let mut patients = Writer::from_path(dir.join("patients.csv"))?;
        patients.write_record([
            "clinic", "patient_id", "class", "arrival", "exit", "wait", "service", "length_of_stay",
        ])?;

        Ok(Self { history, summary, patients })
    }
}

fn opt(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()> {
        self.history.write_record(&[
            row.time.to_string(),
            row.finished_standard.to_string(),
            row.finished_ai.to_string(),
            row.waiting_standard.to_string(),
            row.waiting_ai.to_string(),
            row.standard_doctor_utilization.to_string(),
            row.ai_doctor_utilization.to_string(),
        ])?;
        Ok(())
    }

    fn write_report(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summary.write_record(&[row.clinic.to_string(), row.metric.clone(), row.value.to_string()])?;
        }
        Ok(())
    }

    fn write_records(&mut self, rows: &[PatientRow]) -> OutputResult<()> {
        for row in rows {
            self.patients.write_record(&[
                row.clinic.to_string(),
                row.patient_id.to_string(),
                row.class.to_string(),
                row.arrival.to_string(),
                opt(row.exit),
                row.wait.to_string(),
                row.service.to_string(),
                opt(row.length_of_stay),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.history.flush()?;
        self.summary.flush()?;
        self.patients.flush()?;
        Ok(())
    }
}
