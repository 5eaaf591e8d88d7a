use itertools::Itertools;
use tracing::debug;

use super::*;

/// Selects the vertex the connectivity check (and the block search) starts from.
///
/// Any vertex yields the same verdict and the same blocks on a connected graph, so the choice only
/// affects which vertex is named in error messages and the order in which blocks are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartVertex {
    /// The vertex with the smallest id
    #[default]
    Smallest,
    /// A fixed vertex; the analysis fails if it does not exist
    Id(VertexId),
}

impl StartVertex {
    /// Resolves the start vertex in `graph`
    ///
    /// # Errors
    /// Fails with [`GraphError::EmptyGraph`] if the graph has no vertices and with
    /// [`GraphError::MissingStartVertex`] if a fixed id is absent.
    pub fn resolve<G: VertexLabels>(&self, graph: &G) -> Result<Node> {
        match *self {
            StartVertex::Smallest => graph.node_with_smallest_id().ok_or(GraphError::EmptyGraph),
            StartVertex::Id(id) => {
                if graph.is_empty() {
                    Err(GraphError::EmptyGraph)
                } else {
                    graph.node_of(id).ok_or(GraphError::MissingStartVertex(id))
                }
            }
        }
    }
}

pub trait Connectivity: Traversal + VertexLabels {
    /// Returns *true* if every node is reachable from every other node.
    /// The empty graph is not considered connected.
    fn is_connected(&self) -> bool {
        !self.is_empty() && self.dfs(0).count() == self.len()
    }

    /// Verifies that every vertex is reachable from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] naming the smallest unreachable vertex id.
    fn check_connected(&self, start: Node) -> Result<()> {
        let mut dfs = self.dfs(start);
        dfs.by_ref().for_each(drop);

        if dfs.number_of_visited() == self.number_of_nodes() {
            debug!(
                start = self.id_of(start),
                nodes = self.number_of_nodes(),
                "graph is connected"
            );
            return Ok(());
        }

        let unreachable = self
            .vertices()
            .filter(|&u| !dfs.did_visit_node(u))
            .map(|u| self.id_of(u))
            .collect_vec();

        Err(GraphError::Disconnected {
            start: self.id_of(start),
            unreachable: unreachable.iter().copied().min().unwrap_or_default(),
            count: unreachable.len(),
        })
    }

}

impl<G> Connectivity for G where G: Traversal + VertexLabels {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::graph_from_edges;

    #[test]
    fn connected_graph_passes() {
        let graph = graph_from_edges(&[(1, 2), (2, 3), (3, 4), (4, 2)]);
        assert!(graph.is_connected());
        for u in graph.vertices() {
            assert!(graph.check_connected(u).is_ok());
        }
    }

    #[test]
    fn two_separate_edges_are_rejected() {
        let graph = graph_from_edges(&[(1, 2), (3, 4)]);
        assert!(!graph.is_connected());

        let start = StartVertex::Smallest.resolve(&graph).unwrap();
        assert!(matches!(
            graph.check_connected(start),
            Err(GraphError::Disconnected {
                start: 1,
                unreachable: 3,
                count: 2
            })
        ));
    }

    #[test]
    fn isolated_vertex_is_rejected() {
        let mut graph = graph_from_edges(&[(1, 2)]);
        graph.add_vertex(9).unwrap();
        assert!(matches!(
            graph.check_connected(0),
            Err(GraphError::Disconnected { unreachable: 9, .. })
        ));
    }

    #[test]
    fn single_vertex_is_connected() {
        let mut graph = Graph::new();
        graph.add_vertex(5).unwrap();
        assert!(graph.is_connected());
        assert!(graph.check_connected(0).is_ok());
    }

    #[test]
    fn resolve_start_vertex() {
        let graph = graph_from_edges(&[(4, 2), (2, 7)]);
        assert_eq!(StartVertex::Smallest.resolve(&graph).unwrap(), 1);
        assert_eq!(StartVertex::Id(7).resolve(&graph).unwrap(), 2);
        assert!(matches!(
            StartVertex::Id(1).resolve(&graph),
            Err(GraphError::MissingStartVertex(1))
        ));
        assert!(matches!(
            StartVertex::Smallest.resolve(&Graph::new()),
            Err(GraphError::EmptyGraph)
        ));
    }
}
