/*!
`cactus` decides whether an undirected graph is a **cactus**: a connected graph in which every edge
lies on at most one simple cycle. Equivalently, every biconnected component (*block*) of the graph is
either a single edge (a bridge) or a simple cycle.

# Representation

Vertices are identified from the outside by a strictly positive [`VertexId`](node::VertexId).
Internally, the [`Graph`](graph::Graph) stores them densely and addresses them as
[`Node`](node::Node)s in the range `0..n`, so that every traversal keeps its state in side tables
indexed by node rather than in the vertices themselves. Edges between nodes are tuple-structs
`Edge(Node, Node)`.

The graph is *simple*: self-loops, parallel edges and non-positive ids are rejected on
construction.

# Pipeline

1. Build a [`Graph`](graph::Graph), e.g. via [`AdjacencyListReader`](io::AdjacencyListReader)
   from lines like `1 = 2 3 4`.
2. [`check_undirected`](algo::Undirected::check_undirected): every arc must have its reverse.
3. [`check_connected`](algo::Connectivity::check_connected): a cactus must be connected.
4. [`biconnected_components`](algo::Biconnected::biconnected_components): Hopcroft–Tarjan
   low-link search with an explicit edge stack and an explicit call stack.
5. [`CactusAnalysis`](algo::CactusAnalysis): every vertex must have degree at most `2` inside each
   of its blocks.

Steps 2 to 5 are bundled in [`Cactus::cactus_report`](algo::Cactus::cactus_report):

```rust
use cactus::{prelude::*, algo::*};

// two triangles sharing vertex 3
let graph = Graph::try_from_edges([(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 3)]).unwrap();
let report = graph.cactus_report().unwrap();
assert!(report.is_cactus());
assert_eq!(report.blocks().len(), 2);
```

Errors (malformed input, structural violations, disconnected graphs) are returned as
[`GraphError`](error::GraphError); the library never terminates the process.

# Usage

- [`prelude`] includes nodes, edges, the graph and the basic graph operation traits,
- [`algo`] includes the traversal, validation, decomposition and classification algorithms,
- [`io`] includes the adjacency-list reader and the report/DOT writers,
- [`gens`] includes substructure helpers and a random cactus generator.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
#[cfg(test)]
pub(crate) mod testing;
pub mod vertex;

/// `cactus::prelude` includes definitions for nodes and edges, the graph, its vertices and all
/// basic graph operation traits.
pub mod prelude {
    pub use super::{edge::*, error::*, graph::*, node::*, ops::*, vertex::*};
}

pub(crate) use prelude::*;
