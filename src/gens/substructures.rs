/*!
# Substructure Generators

This module provides utility methods to add common motifs between given vertex ids to an
already existing [`Graph`]:

- **Paths**
- **Cycles**
- **Cliques**

Missing endpoints are created on the fly. Since the graph is simple, adding an edge twice or a
self-loop fails, which makes the helpers double as a consistency check on hand-written fixtures.

# Example

```rust
use cactus::{prelude::*, gens::*};

let mut g = Graph::new();
g.connect_path([1, 2, 3]).unwrap();
g.connect_cycle([3, 4, 5]).unwrap();

assert_eq!(g.id_edges(), vec![(1, 2), (2, 3), (3, 4), (3, 5), (4, 5)]);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// # Errors
    /// Fails if an edge of the path is already present or a vertex is repeated consecutively.
    fn connect_path<P>(&mut self, ids_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = VertexId>;

    /// Connects the given vertices with a **cycle**: consecutive vertices are connected by edges
    /// and the last vertex is connected back to the first.
    ///
    /// # Errors
    /// Fails for fewer than three distinct vertices, since the closing edge is then
    /// a self-loop or a repetition.
    fn connect_cycle<C>(&mut self, ids_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = VertexId>;

    /// Connects all given vertices into a **clique** (complete subgraph).
    ///
    /// # Errors
    /// Fails if one of the clique edges is already present.
    fn connect_clique(&mut self, ids: &[VertexId]) -> Result<()>;
}

impl GeneratorSubstructures for Graph {
    fn connect_path<P>(&mut self, ids_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = VertexId>,
    {
        for (u, v) in ids_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, ids_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = VertexId>,
    {
        let mut iter = ids_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }
        Ok(())
    }

    fn connect_clique(&mut self, ids: &[VertexId]) -> Result<()> {
        for (&u, &v) in ids.iter().tuple_combinations() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}
