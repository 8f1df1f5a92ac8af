//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::{LogFormat, ModeSelection, OutputFormat, RunOptions};

/// Determines the shortest path between two points in the city.
#[derive(Parser, Debug)]
#[command(name = "citymap", version, about, long_about = None)]
pub struct Cli {
    /// Input with coordinates: `<id> <name> <x> <y>` per line
    #[arg(long = "coor", value_name = "FILE")]
    pub coordinates: PathBuf,

    /// Input with the N×N 0/1 connection table
    #[arg(long = "tab", value_name = "FILE")]
    pub connections: PathBuf,

    /// Input with path queries: `<from> <to>` per line
    #[arg(short = 'q', long = "queries", value_name = "FILE")]
    pub queries: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub output: PathBuf,

    /// Travel modes to resolve each query in
    #[arg(short = 't', long = "type", value_enum, ignore_case = true, default_value_t = ModeSelection::Both)]
    pub modes: ModeSelection,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Decimal places for distances in text output
    #[arg(long, default_value_t = cm_io::text::DEFAULT_PRECISION)]
    pub precision: usize,

    /// Log filter when RUST_LOG is unset (e.g. "info", "cm_graph=debug")
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            coordinates: self.coordinates.clone(),
            connections: self.connections.clone(),
            queries:     self.queries.clone(),
            output:      self.output.clone(),
            modes:       self.modes,
            format:      self.format,
            precision:   self.precision,
        }
    }
}
