//! The `OutputWriter` trait implemented by backend writers.

use crate::{HistoryRow, OutputResult, PatientRow, SummaryRow};

pub trait OutputWriter {
    /// Append one live history sample.
    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()>;

    /// Append the metric rows of one batch report.
    fn write_report(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Append batch patient records.
    fn write_records(&mut self, rows: &[PatientRow]) -> OutputResult<()>;

    /// Flush every underlying file handle.  Safe to call more than once;
    /// rows written afterwards are flushed by the next call.
    fn finish(&mut self) -> OutputResult<()>;
}
