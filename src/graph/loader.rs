// src/graph/loader.rs
//! Edge-list parsing: one `source target` record per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{RankError, Result};
use crate::graph::Graph;

/// Parses a whole edge-list text into a graph.
///
/// Every line must split into exactly two whitespace-delimited tokens.
/// A malformed line aborts construction: no partial graph is returned.
pub fn parse(text: &str) -> Result<Graph> {
    let mut pairs = Vec::new();
    for (i, line) in text.lines().enumerate() {
        pairs.push(split_record(line, i + 1)?);
    }
    Ok(Graph::from_pairs(pairs))
}

/// Reads and parses an edge list from a buffered reader.
pub fn read_from<R: BufRead>(reader: R) -> Result<Graph> {
    let mut pairs = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        pairs.push(split_record(&line, i + 1)?);
    }
    Ok(Graph::from_pairs(pairs))
}

/// Loads a graph from a file path, or from stdin when no path is given.
pub fn load(path: Option<&Path>) -> Result<Graph> {
    match path {
        Some(p) => {
            let file = File::open(p).map_err(|source| RankError::Io {
                source,
                path: p.to_path_buf(),
            })?;
            read_from(BufReader::new(file))
        }
        None => read_from(io::stdin().lock()),
    }
}

fn split_record(line: &str, line_no: usize) -> Result<(String, String)> {
    let mut tokens = line.split_whitespace();
    let source = tokens.next();
    let target = tokens.next();
    let extra = tokens.count();

    match (source, target) {
        (Some(s), Some(t)) if extra == 0 => Ok((s.to_string(), t.to_string())),
        (s, t) => Err(RankError::Parse {
            line: line_no,
            found: usize::from(s.is_some()) + usize::from(t.is_some()) + extra,
        }),
    }
}
