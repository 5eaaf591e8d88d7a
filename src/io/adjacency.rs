//! # AdjacencyList
//!
//! The AdjacencyList-Format lists one vertex per line followed by a separator and the
//! (possibly empty) list of its neighbors:
//! ```text
//! 1 = 2 3
//! 2 = 3
//! 4 = 3
//! ```
//! Vertex ids are positive integers, tokens are separated by arbitrary whitespace. Every
//! listed neighbor is connected to the vertex of the record. An edge `{u, v}` may be listed from
//! both sides (`u = v` and `v = u`), but listing it twice from the same vertex is a duplicate edge.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use fxhash::FxHashSet;
use tracing::debug;

use super::*;
use crate::{error::*, graph::Graph, node::*, ops::*};

/// A GraphReader for the AdjacencyList-Format
#[derive(Debug, Clone)]
pub struct AdjacencyListReader {
    /// Token between the vertex and its neighbors
    separator: String,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Accept `v = u` after `u = v` as a confirmation of the same edge
    allow_mirrored: bool,
}

impl Default for AdjacencyListReader {
    fn default() -> Self {
        Self {
            separator: "=".to_string(),
            comment_identifier: "#".to_string(),
            allow_mirrored: true,
        }
    }
}

impl AdjacencyListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator token
    pub fn separator<S: Into<String>>(mut self, s: S) -> Self {
        self.separator = s.into();
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// If *false*, an edge listed from both of its endpoints is reported as duplicate
    pub fn allow_mirrored(mut self, allow: bool) -> Self {
        self.allow_mirrored = allow;
        self
    }

    /// Parses a single non-comment line into the vertex and its neighbors
    fn parse_record(&self, line_no: usize, line: &str) -> Result<(VertexId, Vec<VertexId>)> {
        let malformed = || GraphError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        };

        let mut tokens = line.split_whitespace();
        let vertex = parse_vertex_id(tokens.next().ok_or_else(malformed)?).ok_or_else(malformed)??;
        raise_error_unless!(tokens.next() == Some(self.separator.as_str()), malformed());

        let mut neighbors = Vec::new();
        for token in tokens {
            neighbors.push(parse_vertex_id(token).ok_or_else(malformed)??);
        }

        Ok((vertex, neighbors))
    }
}

/// Parses a token of decimal digits into a [`VertexId`].
///
/// Returns `None` if the token is not a number at all and `Some(Err(_))` if it is a number
/// outside the range of valid ids (including `0`). Numbers beyond `u64` are reported as
/// `u64::MAX`.
fn parse_vertex_id(token: &str) -> Option<Result<VertexId>> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // all digits, so parsing only fails on overflow
    let value: u64 = token.parse().unwrap_or(u64::MAX);
    Some(if is_valid_vertex_id(value) {
        Ok(value as VertexId)
    } else {
        Err(GraphError::InvalidVertexId(value))
    })
}

impl GraphReader<Graph> for AdjacencyListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph> {
        let mut graph = Graph::new();
        let mut listed: FxHashSet<(VertexId, VertexId)> = FxHashSet::default();

        for (line_no, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line = std::str::from_utf8(&bytes).map_err(|_| GraphError::MalformedLine {
                line: line_no + 1,
                content: String::from_utf8_lossy(&bytes).into_owned(),
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(&self.comment_identifier) {
                continue;
            }

            let (vertex, neighbors) = self.parse_record(line_no + 1, trimmed)?;
            graph.ensure_vertex(vertex)?;

            for neighbor in neighbors {
                raise_error_unless!(
                    listed.insert((vertex, neighbor)),
                    GraphError::DuplicateEdge(vertex, neighbor)
                );

                if self.allow_mirrored && neighbor != vertex && listed.contains(&(neighbor, vertex)) {
                    continue;
                }

                graph.add_edge(vertex, neighbor)?;
            }
        }

        debug!(
            vertices = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "read adjacency list"
        );
        Ok(graph)
    }
}

/// Trait for creating graphs from an AdjacencyListReader.
/// Used as shorthand for default AdjacencyListReader settings
pub trait AdjacencyListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_adjacency_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_adjacency_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_adjacency_list(BufReader::new(File::open(path)?))
    }
}

impl AdjacencyListRead for Graph {
    fn try_read_adjacency_list<R: BufRead>(reader: R) -> Result<Self> {
        AdjacencyListReader::default().try_read_graph(reader)
    }
}
