/*!
# Random Cacti

[`RandomCactus`] grows a cactus block by block. Vertex `1` is created first; every further block
is attached to a uniformly random existing vertex and is

- a **bridge** to a single new vertex with probability `bridge_prob`, or
- a **cycle** of uniformly random length in `3..=max_cycle_len` through the attachment vertex and
  `len - 1` new vertices otherwise.

New vertices receive consecutive ids, so the result always has ids `1..=n`.
*/

use super::*;

/// Generator for random cacti.
///
/// ```rust
/// use cactus::{algo::*, gens::*};
/// use rand::SeedableRng;
///
/// let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(3);
/// let graph = RandomCactus::new().blocks(20).graph(&mut rng).unwrap();
///
/// assert!(graph.is_cactus().unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RandomCactus {
    blocks: usize,
    max_cycle_len: NumNodes,
    bridge_prob: f64,
}

impl Default for RandomCactus {
    fn default() -> Self {
        Self {
            blocks: 0,
            max_cycle_len: 6,
            bridge_prob: 0.3,
        }
    }
}

impl RandomCactus {
    /// Shorthand for default: no blocks, cycles of length up to `6`, bridges with probability `0.3`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of blocks
    pub fn blocks(mut self, blocks: usize) -> Self {
        self.blocks = blocks;
        self
    }

    /// Sets the maximum length of a cycle block.
    ///
    /// Lengths below `3` only produce bridges.
    pub fn max_cycle_len(mut self, len: NumNodes) -> Self {
        self.max_cycle_len = len;
        self
    }

    /// Sets the probability of a new block being a bridge
    pub fn bridge_prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob));
        self.bridge_prob = prob;
        self
    }

    /// Returns the edges of the next block, allocating new ids starting at `next_id + 1`
    fn next_block<R: Rng>(&self, rng: &mut R, next_id: &mut VertexId) -> Vec<(VertexId, VertexId)> {
        let anchor = rng.random_range(1..=*next_id);

        if self.max_cycle_len < 3 || rng.random_bool(self.bridge_prob) {
            *next_id += 1;
            return vec![(anchor, *next_id)];
        }

        let len = rng.random_range(3..=self.max_cycle_len);
        let first = *next_id + 1;
        *next_id += len - 1;

        let mut edges = Vec::with_capacity(len as usize);
        let mut prev = anchor;
        for cur in first..=*next_id {
            edges.push((prev, cur));
            prev = cur;
        }
        edges.push((prev, anchor));
        edges
    }
}

impl GraphGenerator for RandomCactus {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = (VertexId, VertexId)>
    where
        R: Rng,
    {
        let mut next_id: VertexId = 1;
        (0..self.blocks).flat_map(move |_| self.next_block(rng, &mut next_id))
    }

    fn graph<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        let mut graph = Graph::new();
        graph.add_vertex(1)?;
        for (u, v) in self.stream(rng) {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }
}
