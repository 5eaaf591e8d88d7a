/*!
Biconnected components (blocks) via the low-link search of Hopcroft and Tarjan.

Every traversed edge is pushed onto an edge stack: tree edges when descending, back edges when they
lead to an ancestor discovered earlier. Once a child `n` of `v` is finished with
`low(n) >= discovery(v)`, no edge below `n` reaches above `v`; the edges pushed since `(v, n)`
(inclusive) form one block and are popped off the stack.
*/

use tracing::{debug, trace};

use super::*;

pub trait Biconnected: AdjacencyList {
    /// Returns the blocks of the graph as lists of edges in the order they were traversed.
    /// Every edge of the graph belongs to exactly one block; isolated nodes belong to none.
    fn biconnected_components(&self) -> Vec<Vec<Edge>> {
        BlockSearch::new(self).compute_all()
    }

    /// Returns the blocks of the connected component containing `start`.
    /// ** Panics if `start >= n` **
    fn biconnected_components_from(&self, start: Node) -> Vec<Vec<Edge>> {
        BlockSearch::new(self).compute(start)
    }
}

impl<G> Biconnected for G where G: AdjacencyList {}

/// The search behind [`Biconnected`].
///
/// The recursion of the textbook algorithm is simulated by `call_stack`: a frame is pushed when a
/// node is discovered (pre-visit) and popped once its neighbors are exhausted (post-visit), at
/// which point its low-link is propagated into the frame below, i.e. its DFS parent.
pub struct BlockSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    states: Vec<NodeState>,
    time: Node,

    edge_stack: Vec<Edge>,
    call_stack: Vec<StackFrame<'a, G>>,

    blocks: Vec<Vec<Edge>>,
}

impl<'a, G> BlockSearch<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            states: vec![NodeState::default(); graph.len()],
            time: 0,
            edge_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
            blocks: Vec::new(),
        }
    }

    /// Runs the search from every yet undiscovered node
    pub fn compute_all(mut self) -> Vec<Vec<Edge>> {
        for u in self.graph.vertices() {
            if !self.states[u as usize].is_discovered() {
                self.search(u);
            }
        }
        self.blocks
    }

    /// Runs the search from `start` only
    pub fn compute(mut self, start: Node) -> Vec<Vec<Edge>> {
        self.search(start);
        self.blocks
    }

    fn push_node(&mut self, node: Node, parent: Option<Node>) {
        self.time += 1;
        self.states[node as usize].discover(self.time, parent);
        self.call_stack.push(StackFrame {
            node,
            neighbors: self.graph.neighbors_of(node),
        });
    }

    fn search(&mut self, root: Node) {
        let blocks_before = self.blocks.len();
        self.push_node(root, None);

        while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;
            let v_state = self.states[v as usize];

            let mut descend_into = None;
            for n in frame.neighbors.by_ref() {
                let n_state = self.states[n as usize];
                if !n_state.is_discovered() {
                    descend_into = Some(n);
                    break;
                }

                // the tree edge to the parent is not a back edge; a back edge is pushed from its
                // later discovered endpoint only
                if Some(n) != v_state.parent() && n_state.discovery < v_state.discovery {
                    self.edge_stack.push(Edge(v, n));
                    self.states[v as usize].update_low(n_state.discovery);
                }
            }

            if let Some(n) = descend_into {
                self.edge_stack.push(Edge(v, n));
                self.push_node(n, Some(v));
                continue;
            }

            self.call_stack.pop();

            if let Some(parent) = v_state.parent() {
                let low = self.states[v as usize].low;
                self.states[parent as usize].update_low(low);

                if low >= self.states[parent as usize].discovery {
                    self.pop_block(Edge(parent, v));
                }
            }
        }

        // whatever is left on the stack after the root returns forms one final block
        if !self.edge_stack.is_empty() {
            let residual = std::mem::take(&mut self.edge_stack);
            trace!(edges = residual.len(), "drain residual block");
            self.blocks.push(residual);
        }

        debug!(
            root = root,
            blocks = self.blocks.len() - blocks_before,
            "block search finished"
        );
    }

    /// Pops edges off the stack up to and including `until` and stores them as a new block
    fn pop_block(&mut self, until: Edge) {
        let mut block = Vec::new();
        while let Some(e) = self.edge_stack.pop() {
            block.push(e);
            if e == until {
                break;
            }
        }

        debug_assert_eq!(block.last(), Some(&until));
        trace!(edges = block.len(), cut = until.0, "carved block");
        self.blocks.push(block);
    }
}

struct StackFrame<'a, G>
where
    G: AdjacencyList + 'a,
{
    node: Node,
    neighbors: G::NeighborIter<'a>,
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    /// `0` while undiscovered, discovery times start at `1`
    discovery: Node,
    low: Node,
    parent: Option<OptionalNode>,
}

impl NodeState {
    fn is_discovered(&self) -> bool {
        self.discovery > 0
    }

    fn discover(&mut self, time: Node, parent: Option<Node>) {
        debug_assert!(!self.is_discovered());
        self.discovery = time;
        self.low = time;
        self.parent = parent.and_then(OptionalNode::new);
    }

    fn parent(&self) -> Option<Node> {
        self.parent.map(|p| p.get())
    }

    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}
