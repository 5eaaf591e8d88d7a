/*!
# Graph

[`Graph`] is the only graph representation of this crate. Vertices are stored densely in
insertion order (their position is their [`Node`]) and are addressed from the outside by their
[`VertexId`]. Edges are registered explicitly in both directions; the additional arc set makes
duplicate detection `O(1)`.

Construction is strict: invalid ids, self-loops and parallel edges are rejected with a
[`GraphError`]. The graph is always simple.
*/

use std::{iter::Copied, slice::Iter};

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use tracing::trace;

use crate::{error::*, ops::*, vertex::Vertex, *};

/// A simple graph over externally identified vertices.
///
/// After [`Cactus::decompose`](crate::algo::Cactus::decompose) the graph additionally owns its
/// biconnected components, each materialized as a `Graph` of its own.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: FxHashMap<VertexId, Node>,
    arcs: FxHashSet<Edge>,
    num_edges: NumEdges,
    pub(crate) components: Vec<Graph>,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from a list of undirected edges given by vertex ids
    pub fn try_from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Inserts a new vertex and returns its node.
    ///
    /// # Errors
    /// Fails if `id == 0` or if `id` is already in use.
    pub fn add_vertex(&mut self, id: VertexId) -> Result<Node> {
        if !is_valid_vertex_id(id as u64) {
            return Err(GraphError::InvalidVertexId(id as u64));
        }
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }

        let u = self.vertices.len() as Node;
        self.vertices.push(Vertex::new(id));
        self.index.insert(id, u);
        Ok(u)
    }

    /// Returns the node of vertex `id`, creating the vertex if it does not exist yet
    pub fn ensure_vertex(&mut self, id: VertexId) -> Result<Node> {
        match self.index.get(&id) {
            Some(&u) => Ok(u),
            None => self.add_vertex(id),
        }
    }

    /// Adds the undirected edge `{from, to}`, creating missing endpoints.
    ///
    /// # Errors
    /// Fails on invalid ids, on self-loops and if the edge exists in either direction.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let (u, v) = self.arc_endpoints(from, to)?;
        let e = Edge(u, v);
        if self.arcs.contains(&e) || self.arcs.contains(&e.reverse()) {
            return Err(GraphError::DuplicateEdge(from, to));
        }

        self.insert_arc(u, v);
        self.insert_arc(v, u);
        self.num_edges += 1;
        Ok(())
    }

    /// Adds only the arc `from -> to`, creating missing endpoints.
    ///
    /// This is meant for inputs that list arcs rather than edges; such a graph has to pass
    /// [`Undirected::check_undirected`](crate::algo::Undirected::check_undirected) before it can
    /// be analyzed.
    ///
    /// # Errors
    /// Fails on invalid ids, on self-loops and if the arc already exists.
    pub fn add_arc(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let (u, v) = self.arc_endpoints(from, to)?;
        if self.arcs.contains(&Edge(u, v)) {
            return Err(GraphError::DuplicateEdge(from, to));
        }

        if !self.arcs.contains(&Edge(v, u)) {
            self.num_edges += 1;
        }
        self.insert_arc(u, v);
        Ok(())
    }

    /// Validates both ids before creating missing endpoints; a rejected arc leaves the graph
    /// untouched.
    fn arc_endpoints(&mut self, from: VertexId, to: VertexId) -> Result<(Node, Node)> {
        for id in [from, to] {
            if !is_valid_vertex_id(id as u64) {
                return Err(GraphError::InvalidVertexId(id as u64));
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }

        Ok((self.ensure_vertex(from)?, self.ensure_vertex(to)?))
    }

    fn insert_arc(&mut self, u: Node, v: Node) {
        debug_assert!(!Edge(u, v).is_loop());
        trace!(from = self.id_of(u), to = self.id_of(v), "insert arc");
        self.arcs.insert(Edge(u, v));
        self.vertices[u as usize].add_neighbor(v);
    }

    /// Returns *true* if a vertex with the given id exists
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns *true* if the undirected edge `{u, v}` exists (in at least one direction)
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        match (self.node_of(u), self.node_of(v)) {
            (Some(u), Some(v)) => self.arcs.contains(&Edge(u, v)) || self.arcs.contains(&Edge(v, u)),
            _ => false,
        }
    }

    /// Returns the vertex with the given id
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.node_of(id).map(|u| &self.vertices[u as usize])
    }

    /// Returns an iterator over all vertex ids in insertion order
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// Returns all vertex ids in increasing order
    pub fn sorted_vertex_ids(&self) -> Vec<VertexId> {
        self.vertex_ids().sorted_unstable().collect_vec()
    }

    /// Returns the ids of all neighbors of vertex `id` in insertion order
    pub fn neighbor_ids_of(&self, id: VertexId) -> Option<impl Iterator<Item = VertexId> + '_> {
        self.vertex(id)
            .map(|vertex| vertex.neighbors().map(|v| self.id_of(v)))
    }

    /// Returns the degree of vertex `id` within this graph
    pub fn degree_of_id(&self, id: VertexId) -> Option<NumNodes> {
        self.vertex(id).map(Vertex::degree)
    }

    /// Returns all edges as normalized pairs of vertex ids in increasing order
    pub fn id_edges(&self) -> Vec<(VertexId, VertexId)> {
        self.arcs
            .iter()
            .map(|&Edge(u, v)| {
                let (a, b) = (self.id_of(u), self.id_of(v));
                (a.min(b), a.max(b))
            })
            .sorted_unstable()
            .dedup()
            .collect_vec()
    }

    /// Returns the biconnected components computed by the last decomposition.
    /// Empty if no decomposition was run yet.
    pub fn components(&self) -> &[Graph] {
        &self.components
    }

    /// Materializes the subgraph spanned by a set of edges between nodes of `self`
    pub fn edge_induced_subgraph<I>(&self, edges: I) -> Result<Graph>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut sub = Graph::new();
        for e in edges {
            let (u, v) = self.ids_of_edge(e);
            sub.add_edge(u, v)?;
        }
        Ok(sub)
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for Graph {
    type NeighborIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.vertices[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.vertices[u as usize].degree()
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.arcs.contains(&Edge(u, v))
    }
}

impl VertexLabels for Graph {
    fn id_of(&self, u: Node) -> VertexId {
        self.vertices[u as usize].id()
    }

    fn node_of(&self, id: VertexId) -> Option<Node> {
        self.index.get(&id).copied()
    }
}
