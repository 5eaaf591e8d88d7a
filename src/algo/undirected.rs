use tracing::debug;

use super::*;

/// Structural check that the arc relation of a graph is symmetric.
///
/// Graphs built exclusively through [`Graph::add_edge`] always pass; the check exists for graphs
/// that were supplied as arcs (see [`Graph::add_arc`]).
pub trait Undirected: AdjacencyList + AdjacencyTest + VertexLabels {
    /// Returns the first arc `(u, v)` without reverse arc `(v, u)` if one exists
    fn find_unmatched_arc(&self) -> Option<Edge> {
        self.edges(false).find(|&Edge(u, v)| !self.has_edge(v, u))
    }

    /// Returns *true* if every arc has its reverse
    fn is_undirected(&self) -> bool {
        self.find_unmatched_arc().is_none()
    }

    /// # Errors
    /// Returns [`GraphError::Directed`] naming the first arc without reverse.
    fn check_undirected(&self) -> Result<()> {
        match self.find_unmatched_arc() {
            Some(e) => {
                let (from, to) = self.ids_of_edge(e);
                Err(GraphError::Directed { from, to })
            }
            None => {
                debug!(edges = self.edges(true).count(), "graph is undirected");
                Ok(())
            }
        }
    }
}

impl<G> Undirected for G where G: AdjacencyList + AdjacencyTest + VertexLabels {}
