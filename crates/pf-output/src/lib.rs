//! `pf-output`: CSV writers for live history and batch results.
//!
//! | File                | Rows                                         |
//! |---------------------|----------------------------------------------|
//! | `history.csv`       | one per live-engine history sample           |
//! | `batch_summary.csv` | one per (clinic, metric) of a batch report   |
//! | `patients.csv`      | one per batch patient record                 |
//!
//! Live history is streamed through [`HistoryObserver`], which implements
//! `pf_live::LiveObserver`.  Batch results are written directly.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pf_output::{CsvWriter, HistoryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = HistoryObserver::new(writer);
//! engine.drive(0.25, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::HistoryObserver;
pub use row::{HistoryRow, PatientRow, SummaryRow, patient_rows, summary_rows};
pub use writer::OutputWriter;
