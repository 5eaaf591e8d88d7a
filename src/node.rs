/*!
# Node Representation

Vertices carry two identities:
- a [`VertexId`] which is supplied from the outside (e.g. an input file), is strictly positive and
  never regenerated,
- a [`Node`] which is the dense internal index `0..n` assigned in insertion order.

All algorithms work on [`Node`]s so that their per-traversal state can live in plain side tables
(`Vec<_>` / [`NodeBitSet`]) indexed by node. Only construction and reporting speak [`VertexId`].
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Dense internal vertex index in the range `0..n`
pub type Node = u32;

/// External vertex identifier; `0` is never a valid id
pub type VertexId = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Returns *true* if `id` may be used as a [`VertexId`]
pub const fn is_valid_vertex_id(id: u64) -> bool {
    id > 0 && id <= VertexId::MAX as u64
}

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn optional_node_is_compact() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }

    #[test]
    fn optional_node_roundtrip() {
        for u in [0, 1, 17, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(u).map(|x| x.get()), Some(u));
        }
        assert!(OptionalNode::new(INVALID_NODE).is_none());
    }

    #[test]
    fn vertex_id_range() {
        assert!(!is_valid_vertex_id(0));
        assert!(is_valid_vertex_id(1));
        assert!(is_valid_vertex_id(VertexId::MAX as u64));
        assert!(!is_valid_vertex_id(VertexId::MAX as u64 + 1));
    }
}
