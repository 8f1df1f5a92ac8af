//! Line-oriented input loaders.
//!
//! Each loader has a file variant and a `_reader` variant accepting any
//! `Read` (pass a `std::io::Cursor` in tests).  Each line is split on any
//! run of whitespace into a `csv::StringRecord`; blank lines are skipped.
//! Coordinate and matrix files may also carry `#` comment lines.  Query files
//! have no comment syntax, so a point name may start with `#`.
//!
//! # Load order
//!
//! 1. [`load_coordinates`] inserts points and returns their ids in file
//!    order.
//! 2. [`load_connections`] reads an N×N `0`/`1` matrix whose rows and
//!    columns follow that order.  A `1` at `[i][j]` connects points `i` and
//!    `j` in both directions; the diagonal is ignored.
//! 3. [`load_queries`] resolves `<from> <to>` name pairs against the map.
//!
//! A failing step aborts with the offending line number.  Points inserted
//! before the failure are not rolled back.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;
use tracing::debug;

use cm_core::{Point, PointId, Query, TravelMode};
use cm_graph::Map;

use crate::{LoadError, LoadResult};

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CoordinateRecord {
    id:   u32,
    name: String,
    x:    i32,
    y:    i32,
}

/// Whether [`lines`] drops lines whose first token starts with `#`.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Comments {
    Skip,
    Keep,
}

/// One non-blank input line split into tokens.
struct Line {
    number: u64,
    tokens: StringRecord,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `<id> <name> <x> <y>` records into `map`.
///
/// Returns the ids in file order, which is the row/column order of the
/// connection matrix.
pub fn load_coordinates(path: &Path, map: &mut Map) -> LoadResult<Vec<PointId>> {
    open(path)
        .and_then(|file| load_coordinates_reader(file, map))
        .map_err(|e| e.in_file(path))
}

/// Like [`load_coordinates`] but accepts any `Read` source.
pub fn load_coordinates_reader<R: Read>(reader: R, map: &mut Map) -> LoadResult<Vec<PointId>> {
    let mut order = Vec::new();

    for line in lines(reader, Comments::Skip) {
        let Line { number, tokens } = line?;
        if tokens.len() != 4 {
            return Err(LoadError::Malformed {
                line:    number,
                message: format!("expected `<id> <name> <x> <y>`, found {} field(s)", tokens.len()),
            });
        }

        let record: CoordinateRecord = tokens
            .deserialize(None)
            .map_err(|e| LoadError::Malformed { line: number, message: e.to_string() })?;

        let requested = PointId(record.id);
        let id = map.add_point_with_id(requested, &record.name, Point::new(record.x, record.y));
        if !id.is_valid() {
            return Err(LoadError::Rejected { line: number, id: requested, name: record.name });
        }
        order.push(id);
    }

    debug!(points = order.len(), "loaded coordinates");
    Ok(order)
}

/// Load the connection matrix for the points in `order`.
///
/// Returns the number of undirected connections in the map afterwards.
pub fn load_connections(path: &Path, map: &mut Map, order: &[PointId]) -> LoadResult<usize> {
    open(path)
        .and_then(|file| load_connections_reader(file, map, order))
        .map_err(|e| e.in_file(path))
}

/// Like [`load_connections`] but accepts any `Read` source.
pub fn load_connections_reader<R: Read>(
    reader: R,
    map:    &mut Map,
    order:  &[PointId],
) -> LoadResult<usize> {
    let n = order.len();
    let mut rows = 0usize;

    for line in lines(reader, Comments::Skip) {
        let Line { number, tokens } = line?;
        let Some(&from) = order.get(rows) else {
            return Err(LoadError::MatrixSize { expected: n, got: rows + 1 });
        };
        if tokens.len() != n {
            return Err(LoadError::Malformed {
                line:    number,
                message: format!("expected {n} matrix entries, found {}", tokens.len()),
            });
        }

        for (&to, token) in order.iter().zip(tokens.iter()) {
            match token {
                "0" => {}
                "1" => map.add_connection(from, to)?,
                other => {
                    return Err(LoadError::Malformed {
                        line:    number,
                        message: format!("invalid matrix entry {other:?}: expected 0 or 1"),
                    });
                }
            }
        }
        rows += 1;
    }

    if rows != n {
        return Err(LoadError::MatrixSize { expected: n, got: rows });
    }

    let connections = map.connection_count();
    debug!(rows, connections, "loaded connection matrix");
    Ok(connections)
}

/// Load `<from> <to>` name pairs as queries of `mode`.
pub fn load_queries(path: &Path, map: &Map, mode: TravelMode) -> LoadResult<Vec<Query>> {
    open(path)
        .and_then(|file| load_queries_reader(file, map, mode))
        .map_err(|e| e.in_file(path))
}

/// Like [`load_queries`] but accepts any `Read` source.
pub fn load_queries_reader<R: Read>(reader: R, map: &Map, mode: TravelMode) -> LoadResult<Vec<Query>> {
    let mut queries = Vec::new();

    for line in lines(reader, Comments::Keep) {
        let Line { number, tokens } = line?;
        if tokens.len() != 2 {
            return Err(LoadError::Malformed {
                line:    number,
                message: format!("expected `<from> <to>`, found {} field(s)", tokens.len()),
            });
        }

        let from = lookup(map, &tokens[0], number)?;
        let to = lookup(map, &tokens[1], number)?;
        queries.push(Query::new(from, to, mode));
    }

    debug!(queries = queries.len(), %mode, "loaded queries");
    Ok(queries)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open(path: &Path) -> LoadResult<File> {
    Ok(File::open(path)?)
}

fn lookup(map: &Map, name: &str, line: u64) -> LoadResult<PointId> {
    map.id_of(name)
        .map_err(|_| LoadError::UnknownPoint { line, name: name.to_owned() })
}

/// Split `reader` into non-blank lines of whitespace-separated tokens.
///
/// Line numbers count every physical line, blank and comment lines included.
fn lines<R: Read>(reader: R, comments: Comments) -> impl Iterator<Item = LoadResult<Line>> {
    BufReader::new(reader)
        .lines()
        .zip(1u64..)
        .filter_map(move |(result, number)| match result {
            Err(e) => Some(Err(LoadError::from(e))),
            Ok(text) => {
                let tokens: StringRecord = text.split_whitespace().collect();
                let is_comment = comments == Comments::Skip
                    && tokens.get(0).is_some_and(|first| first.starts_with('#'));
                (!tokens.is_empty() && !is_comment).then_some(Ok(Line { number, tokens }))
            }
        })
}
