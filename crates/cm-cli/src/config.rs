//! Run configuration: what to load, which modes to resolve, how to write.

use std::path::PathBuf;

use clap::ValueEnum;

use cm_core::TravelMode;

/// Which travel modes each query is answered in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ModeSelection {
    Pedestrian,
    Car,
    /// Pedestrian first, then car, for every query.
    #[default]
    Both,
}

impl ModeSelection {
    /// Mode queries are loaded with.  `Both` loads pedestrian queries and
    /// toggles each one to car during resolution.
    pub fn load_mode(self) -> TravelMode {
        match self {
            ModeSelection::Pedestrian | ModeSelection::Both => TravelMode::Pedestrian,
            ModeSelection::Car => TravelMode::Car,
        }
    }

    #[inline]
    pub fn is_both(self) -> bool {
        self == ModeSelection::Both
    }
}

/// Output file format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled three-line records.
    #[default]
    Text,
    /// `mode,from,to,distance,path` rows.
    Csv,
}

/// Everything one batch run needs.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub coordinates: PathBuf,
    pub connections: PathBuf,
    pub queries:     PathBuf,
    pub output:      PathBuf,
    pub modes:       ModeSelection,
    pub format:      OutputFormat,
    /// Decimal places for distances in text output.
    pub precision:   usize,
}
