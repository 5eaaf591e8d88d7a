/*!
# Graph Algorithms

This module provides the analysis pipeline on top of [`Graph`](crate::graph::Graph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use cactus::algo::*;
```
and gain access to traversal, the undirected and connectivity checks, the biconnected component
decomposition and the cactus classification.

Every algorithm keeps its traversal state in side tables owned by the search itself; graphs are
only borrowed immutably and can be analyzed any number of times.
*/

mod biconnected;
mod cactus;
mod connectivity;
mod traversal;
mod undirected;

use crate::{error::*, prelude::*};

pub use biconnected::*;
pub use cactus::*;
pub use connectivity::*;
pub use traversal::*;
pub use undirected::*;
