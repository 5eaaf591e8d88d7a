use std::{iter::Copied, slice::Iter};

use crate::*;

/// A vertex of a [`Graph`](crate::graph::Graph): its external id and its adjacency.
///
/// Neighbors are stored as internal [`Node`]s in insertion order; keys are unique as the owning
/// graph rejects parallel edges. Traversal state lives in the search structs of
/// [`algo`](crate::algo).
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    neighbors: Vec<Node>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
        }
    }

    /// Returns the external id of the vertex
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the size of the adjacency
    pub fn degree(&self) -> NumNodes {
        self.neighbors.len() as NumNodes
    }

    /// Returns an iterator over the neighbors in insertion order
    pub fn neighbors(&self) -> Copied<Iter<'_, Node>> {
        self.neighbors.iter().copied()
    }

    /// Adds a neighbor without checking for duplicates
    pub(crate) fn add_neighbor(&mut self, v: Node) {
        self.neighbors.push(v);
    }
}
