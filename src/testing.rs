//! Helpers shared by the unit tests of several modules.

use itertools::Itertools;

use crate::*;

/// Builds a graph from undirected edges over vertex ids; panics on invalid input
pub fn graph_from_edges(edges: &[(VertexId, VertexId)]) -> Graph {
    Graph::try_from_edges(edges.iter().copied()).unwrap()
}

/// Canonical form of a set of blocks: every block as its sorted list of normalized id-edges,
/// blocks sorted lexicographically
pub fn canonical_blocks(graph: &Graph, blocks: &[Vec<Edge>]) -> Vec<Vec<(VertexId, VertexId)>> {
    blocks
        .iter()
        .map(|block| {
            block
                .iter()
                .map(|&e| {
                    let (u, v) = graph.ids_of_edge(e);
                    (u.min(v), u.max(v))
                })
                .sorted_unstable()
                .collect_vec()
        })
        .sorted()
        .collect_vec()
}

/// Canonical form of materialized components, comparable with [`canonical_blocks`]
pub fn canonical_components(components: &[Graph]) -> Vec<Vec<(VertexId, VertexId)>> {
    components
        .iter()
        .map(Graph::id_edges)
        .sorted()
        .collect_vec()
}
