//! Error type shared by construction, validation and ingestion.
//!
//! Every variant is a fatal input condition for the analysis pipeline. A graph that is *not* a
//! cactus is a regular outcome and is reported through
//! [`CactusReport`](crate::algo::CactusReport) instead.

use std::io;

use thiserror::Error;

use crate::node::VertexId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(
        "line {line} does not match `<vertex> = <neighbor1> <neighbor2> ...` (e.g. `1 = 2 3 4`): {content:?}"
    )]
    MalformedLine { line: usize, content: String },
    #[error("vertex id {0} is invalid; ids must be positive integers")]
    InvalidVertexId(u64),
    #[error("vertex id {0} is already in use")]
    DuplicateVertex(VertexId),
    #[error("self-loop at vertex {0}; the input graph must be simple")]
    SelfLoop(VertexId),
    #[error("edge between vertices {0} and {1} already exists")]
    DuplicateEdge(VertexId, VertexId),
    #[error("graph is directed: arc {from} -> {to} has no reverse arc")]
    Directed { from: VertexId, to: VertexId },
    #[error("graph has no vertices")]
    EmptyGraph,
    #[error("start vertex {0} does not exist")]
    MissingStartVertex(VertexId),
    #[error(
        "graph is not connected: {count} vertices (e.g. {unreachable}) are unreachable from vertex {start}; a cactus must be connected"
    )]
    Disconnected {
        start: VertexId,
        unreachable: VertexId,
        count: usize,
    },
}

impl GraphError {
    /// Returns *true* if the input could not be read at all (as opposed to being read and rejected)
    pub fn is_io(&self) -> bool {
        matches!(self, GraphError::Io(_))
    }
}
