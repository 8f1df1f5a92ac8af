//! `cm-cli` — the `citymap` command-line application.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`cli`]      | `Cli`: clap argument definitions                         |
//! | [`config`]   | `RunOptions`, `ModeSelection`, `OutputFormat`            |
//! | [`app`]      | `App` run stages, `RunSummary`, `AppError` exit codes    |
//! | [`logging`]  | `LogFormat`, `init_logging`                              |
//!
//! # Usage
//!
//! ```text
//! citymap --coor coords.txt --tab matrix.txt -q queries.txt -o routes.txt [-t both]
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;


pub use app::{App, AppError, RunSummary, report_failure};
pub use cli::Cli;
pub use config::{ModeSelection, OutputFormat, RunOptions};
pub use logging::{LogFormat, init_logging};
