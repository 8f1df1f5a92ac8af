//! CSV output backend.
//!
//! One row per route with the header `mode,from,to,distance,path`.
//! Distances are written at full precision.

use std::fs::File;
use std::io::Write;

use csv::Writer;

use crate::writer::RouteWriter;
use crate::{OutputError, OutputResult, RouteRow};

/// Writes routes as CSV rows.
pub struct CsvWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &std::path::Path) -> OutputResult<Self> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(file)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap `out` and write the header row.
    pub fn new(out: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(out);
        rows.write_record(["mode", "from", "to", "distance", "path"])?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.rows
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> RouteWriter for CsvWriter<W> {
    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()> {
        self.rows.write_record(&[
            row.mode.as_str().to_owned(),
            row.from.clone(),
            row.to.clone(),
            row.distance.to_string(),
            row.route.clone(),
        ])?;
        self.finished = false;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
