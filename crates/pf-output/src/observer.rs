//! `HistoryObserver<W>`: bridges `LiveObserver` to an `OutputWriter`.

use pf_core::Minutes;
use pf_live::{HistorySample, LiveObserver};

use crate::writer::OutputWriter;
use crate::{HistoryRow, OutputError, OutputResult};

/// A [`LiveObserver`] that streams every history sample to an
/// [`OutputWriter`] and finishes the writer when the run is driven to
/// completion.
///
/// `LiveObserver` methods have no return value, so the first write error is
/// stored.  Check it with [`take_error`][Self::take_error] after the run.
pub struct HistoryObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> HistoryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// History rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Unwrap the inner writer, e.g. to append batch results.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> LiveObserver for HistoryObserver<W> {
    fn on_history_sample(&mut self, sample: &HistorySample) {
        let result = self.writer.write_history(&HistoryRow::from(sample));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_finish(&mut self, _time: Minutes) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
