//! The `RouteWriter` trait implemented by all output backends.

use tracing::{debug, warn};

use cm_core::Path;
use cm_graph::Map;

use crate::{OutputResult, RouteRow};

/// Trait implemented by the text and CSV writers.
pub trait RouteWriter {
    /// Write one resolved route.
    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()>;

    /// Flush all buffered output.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every reachable path in `paths`, then finish the writer.
///
/// Unreachable (empty) paths are skipped rather than written as a broken
/// record.  Returns the number of routes written.
pub fn write_paths<W: RouteWriter + ?Sized>(
    writer: &mut W,
    map:    &Map,
    paths:  &[Path],
) -> OutputResult<usize> {
    let mut written = 0;
    for path in paths {
        match RouteRow::from_path(map, path)? {
            Some(row) => {
                writer.write_route(&row)?;
                written += 1;
            }
            None => warn!(mode = %path.mode(), "skipping unreachable route"),
        }
    }
    writer.finish()?;
    debug!(written, skipped = paths.len() - written, "routes written");
    Ok(written)
}
