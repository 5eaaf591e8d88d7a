/*!
# Graph Generators

This module provides helpers to construct graphs with a known block structure, mostly for tests.

- [`GeneratorSubstructures`] adds paths, cycles and cliques between given vertex ids to a [`Graph`].
- [`RandomCactus`] is a builder for random cacti: starting from a single vertex, every new block is
  either a bridge or a cycle attached to a uniformly chosen existing vertex. By construction every
  block of the result is an edge or a cycle, so the graph is a cactus.

The typical usage workflow is:

1. Create a generator instance (e.g., `RandomCactus::new()`).
2. Set parameters using builder methods (e.g., `.blocks(10).max_cycle_len(5)`).
3. Generate edges via `generate()` or `stream()`, or a whole graph via `graph()`.
*/

use rand::Rng;

use crate::prelude::*;

mod random_cactus;
mod substructures;

pub use random_cactus::*;
pub use substructures::*;

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges between vertex ids.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<(VertexId, VertexId)>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = (VertexId, VertexId)>
    where
        R: Rng;

    /// Builds a [`Graph`] from the generated edges.
    ///
    /// # Errors
    /// Fails if the generator emits an edge twice or a self-loop.
    fn graph<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        Graph::try_from_edges(self.stream(rng))
    }
}
