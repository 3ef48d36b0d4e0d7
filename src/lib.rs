//! Optimal BFS solver for the Skewb twisty puzzle: a puzzle state representation with a dense
//! bijective ranking, the eight elementary move semantics, and a breadth-first search engine that
//! enumerates the reachable state space from solved and reconstructs shortest solutions.

pub mod codec;
pub mod moves;
pub mod permutation_helpers;
pub mod search;
pub mod state;

pub use moves::Move;
pub use search::{SkewbSolutionTable, UnreachableRankError};
pub use state::Skewb;
