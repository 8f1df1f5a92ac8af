//! Human-readable output backend.
//!
//! Each route becomes a three-line record:
//!
//! ```text
//! Pedestrian route: Station -> Park
//!   distance: 5.00
//!   path: Station -> Park
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::writer::RouteWriter;
use crate::{OutputError, OutputResult, RouteRow};

/// Decimal places used for distances unless overridden.
pub const DEFAULT_PRECISION: usize = 2;

/// Writes labelled route records to any `Write` sink.
pub struct TextWriter<W: Write> {
    out:       W,
    precision: usize,
    finished:  bool,
}

impl TextWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &std::path::Path) -> OutputResult<Self> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, precision: DEFAULT_PRECISION, finished: false }
    }

    /// Number of decimal places printed for distances.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        Ok(self.out)
    }
}

impl<W: Write> RouteWriter for TextWriter<W> {
    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()> {
        writeln!(self.out, "{} route: {}", row.mode.label(), row.endpoints())?;
        writeln!(self.out, "  distance: {:.*}", self.precision, row.distance)?;
        writeln!(self.out, "  path: {}", row.route)?;
        self.finished = false;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
