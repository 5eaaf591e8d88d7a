/*!
Cactus recognition.

A connected graph is a cactus iff each of its blocks is a single edge or a simple cycle. Since a
block is biconnected, this holds iff every vertex has degree at most `2` *within each block it
belongs to*: a block with maximum degree `1` is a bridge, a biconnected block with maximum degree
`2` is a cycle, and a vertex of block-local degree `3` or more witnesses two cycles sharing an edge.

The degrees are taken in the materialized block graphs, not in the input graph; an articulation
point shared by two triangles has degree `4` overall but degree `2` in both of its blocks.
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Shape of a single block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A single edge
    Bridge,
    /// A simple cycle of length at least `3`
    Cycle,
    /// Anything else; only occurs in graphs that are not cacti
    Other,
}

/// Configurable cactus analysis: validation, decomposition and classification.
///
/// ```rust
/// use cactus::{prelude::*, algo::*};
///
/// let graph = Graph::try_from_edges([(1, 2), (2, 3), (3, 1), (2, 4), (4, 3)]).unwrap();
/// let report = CactusAnalysis::new()
///     .start_vertex(StartVertex::Id(1))
///     .analyze(&graph)
///     .unwrap();
///
/// assert!(!report.is_cactus());
/// assert_eq!(report.offending_vertices(), &[2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CactusAnalysis {
    start: StartVertex,
}

impl CactusAnalysis {
    /// Creates a new (default) analysis starting at the smallest vertex id
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the vertex the traversals start from
    pub fn start_vertex(mut self, start: StartVertex) -> Self {
        self.start = start;
        self
    }

    /// Validates `graph` and returns its blocks, each materialized as a [`Graph`].
    ///
    /// # Errors
    /// Fails if the graph is directed, empty, lacks the configured start vertex or is not
    /// connected. The block search itself is never reached in these cases.
    pub fn decompose(&self, graph: &Graph) -> Result<Vec<Graph>> {
        graph.check_undirected()?;
        let start = self.start.resolve(graph)?;
        graph.check_connected(start)?;

        let blocks = graph
            .biconnected_components_from(start)
            .into_iter()
            .map(|block| graph.edge_induced_subgraph(block))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            blocks = blocks.len(),
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "decomposed graph into blocks"
        );
        Ok(blocks)
    }

    /// Validates, decomposes and classifies `graph`.
    ///
    /// # Errors
    /// See [`CactusAnalysis::decompose`]. A graph that is not a cactus is *not* an error.
    pub fn analyze(&self, graph: &Graph) -> Result<CactusReport> {
        Ok(CactusReport::classify(self.decompose(graph)?))
    }
}

/// Outcome of a successful analysis: the blocks and the vertices violating the cactus property
#[derive(Debug, Clone)]
pub struct CactusReport {
    blocks: Vec<Graph>,
    offending: Vec<VertexId>,
}

impl CactusReport {
    /// Classifies a list of blocks. Every vertex of block-local degree greater than `2` is
    /// collected; a vertex is listed once per block in which it violates the bound.
    pub fn classify(blocks: Vec<Graph>) -> Self {
        let offending = blocks
            .iter()
            .flat_map(|block| {
                block
                    .sorted_vertex_ids()
                    .into_iter()
                    .filter(|&id| block.degree_of_id(id).is_some_and(|d| d > 2))
            })
            .collect_vec();

        debug!(
            blocks = blocks.len(),
            offending = offending.len(),
            "classified blocks"
        );
        Self { blocks, offending }
    }

    /// Returns *true* if every block is a bridge or a cycle
    pub fn is_cactus(&self) -> bool {
        self.offending.is_empty()
    }

    /// Returns the ids of the vertices with block-local degree greater than `2`
    pub fn offending_vertices(&self) -> &[VertexId] {
        &self.offending
    }

    pub fn blocks(&self) -> &[Graph] {
        &self.blocks
    }

    /// Returns the number of blocks of the given kind
    pub fn number_of_blocks_of_kind(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.block_kind() == kind).count()
    }
}

/// Cactus-related operations exposed directly on the graph
pub trait Cactus {
    /// Validates the graph and stores its blocks, replacing those of any earlier run.
    /// The stored blocks are accessible via [`Graph::components`].
    fn decompose(&mut self) -> Result<&[Graph]>;

    /// Runs the default [`CactusAnalysis`]
    fn cactus_report(&self) -> Result<CactusReport>;

    /// Shorthand for `self.cactus_report()?.is_cactus()`
    fn is_cactus(&self) -> Result<bool> {
        Ok(self.cactus_report()?.is_cactus())
    }

    /// Returns the shape of the graph read as a single block
    fn block_kind(&self) -> BlockKind;
}

impl Cactus for Graph {
    fn decompose(&mut self) -> Result<&[Graph]> {
        self.components = CactusAnalysis::new().decompose(self)?;
        Ok(&self.components)
    }

    fn cactus_report(&self) -> Result<CactusReport> {
        CactusAnalysis::new().analyze(self)
    }

    fn block_kind(&self) -> BlockKind {
        let (n, m) = (self.number_of_nodes(), self.number_of_edges());
        if m == 1 {
            BlockKind::Bridge
        } else if n >= 3 && n == m && self.degrees().all(|d| d == 2) {
            BlockKind::Cycle
        } else {
            BlockKind::Other
        }
    }
}
