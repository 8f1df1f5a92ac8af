//! Batch run: load the map, resolve every query, write the routes.
//!
//! Stages run strictly in order.  A load failure aborts before the output
//! file is touched; an unreachable query is counted and left out of the
//! output rather than failing the run.

use thiserror::Error;
use tracing::{error, info, info_span};

use cm_core::{Path, Query};
use cm_graph::Map;
use cm_io::{
    CsvWriter, LoadError, OutputError, RouteWriter, TextWriter, load_connections,
    load_coordinates, load_queries, write_paths,
};

use crate::{OutputFormat, RunOptions};

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Write(#[from] OutputError),
}

impl AppError {
    /// Process exit code.  2 is left to clap's usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Load(_) => 3,
            AppError::Write(_) => 4,
        }
    }
}

/// Log `err` once on the error channel and return its exit code.
pub fn report_failure(err: &AppError) -> u8 {
    let code = err.exit_code();
    error!(code, "{err}");
    code
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Counters reported at the end of a successful run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub points:      usize,
    pub connections: usize,
    /// Query lines read from the input.
    pub queries:     usize,
    /// Paths resolved; twice `queries` when both modes are selected.
    pub resolved:    usize,
    pub written:     usize,
    pub unreachable: usize,
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    options: RunOptions,
    map:     Map,
}

impl App {
    pub fn new(options: RunOptions) -> Self {
        App { options, map: Map::new() }
    }

    /// The map built by the load stage.
    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Run all stages.
    pub fn run(&mut self) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::default();

        let queries = self.load(&mut summary)?;
        let paths = self.resolve(&queries);
        summary.resolved = paths.len();
        summary.unreachable = paths.iter().filter(|p| p.is_empty()).count();

        summary.written = self.write(&paths)?;

        info!(
            points      = summary.points,
            queries     = summary.queries,
            written     = summary.written,
            unreachable = summary.unreachable,
            "run complete"
        );
        Ok(summary)
    }

    fn load(&mut self, summary: &mut RunSummary) -> Result<Vec<Query>, LoadError> {
        let _span = info_span!("load").entered();
        let opts = &self.options;

        self.map.clear();
        let order = load_coordinates(&opts.coordinates, &mut self.map)?;
        summary.points = order.len();

        summary.connections = load_connections(&opts.connections, &mut self.map, &order)?;

        let queries = load_queries(&opts.queries, &self.map, opts.modes.load_mode())?;
        summary.queries = queries.len();

        info!(
            points      = summary.points,
            connections = summary.connections,
            queries     = summary.queries,
            "map loaded"
        );
        Ok(queries)
    }

    /// Resolve `queries` in the selected modes.
    ///
    /// With both modes each query yields its pedestrian path followed by its
    /// car path.
    pub fn resolve(&self, queries: &[Query]) -> Vec<Path> {
        let _span = info_span!("resolve", queries = queries.len()).entered();

        if self.options.modes.is_both() {
            let expanded: Vec<Query> = queries
                .iter()
                .flat_map(|q| [*q, q.toggled()])
                .collect();
            self.map.find_paths(&expanded)
        } else {
            self.map.find_paths(queries)
        }
    }

    fn write(&self, paths: &[Path]) -> Result<usize, OutputError> {
        let _span = info_span!("write").entered();
        let opts = &self.options;

        let mut writer: Box<dyn RouteWriter> = match opts.format {
            OutputFormat::Text => {
                Box::new(TextWriter::create(&opts.output)?.with_precision(opts.precision))
            }
            OutputFormat::Csv => Box::new(CsvWriter::create(&opts.output)?),
        };
        write_paths(writer.as_mut(), &self.map, paths)
    }
}
