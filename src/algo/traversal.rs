/*!
Plain graph traversal.

[`DepthFirstSearch`] is an iterator over all nodes reachable from a start node. The frontier is an
explicit stack and the visited-state lives in a [`NodeBitSet`] owned by the iterator, so arbitrarily
deep graphs can be traversed and the graph itself is never mutated.
*/

use super::*;

/// Stack-based search over all nodes reachable from a start node.
///
/// Nodes are marked visited when they are pushed, hence every node is yielded at most once.
pub struct DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    num_visited: NumNodes,
    stack: Vec<Node>,
}

impl<'a, G> DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            num_visited: 1,
            stack: vec![start],
        }
    }

    /// Returns *true* if `u` was reached so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Returns the number of nodes reached so far
    pub fn number_of_visited(&self) -> NumNodes {
        self.num_visited
    }

    /// Tries to restart the search at a yet unvisited node and returns it if successful.
    /// Requires that the search came to a hold earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> Option<Node> {
        assert!(self.stack.is_empty());
        let u = self.graph.vertices().find(|&u| !self.visited.get_bit(u))?;
        self.visited.set_bit(u);
        self.num_visited += 1;
        self.stack.push(u);
        Some(u)
    }
}

impl<G> Iterator for DepthFirstSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.num_visited += 1;
                self.stack.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.stack.len(),
            Some(self.graph.len() - self.num_visited as usize + self.stack.len()),
        )
    }
}

/// Exposes the traversal iterator as a method on the graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator over all nodes reachable from `start`
    fn dfs(&self, start: Node) -> DepthFirstSearch<'_, Self> {
        DepthFirstSearch::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
