//! Shortest-path search for blockable grids.
//!
//! - **Dijkstra** uniform-cost search with lazy deletion ([`search`])
//! - **Binary min-heap** with FIFO tie-breaking ([`MinHeap`])
//!
//! The search holds no state between calls: every invocation builds its own
//! distance, predecessor and settled tables and returns the settle order
//! together with the path, leaving pacing or animation to the caller.

mod distance;
mod error;
mod heap;
mod search;

pub use distance::manhattan;
pub use error::{InvalidInput, SearchError};
pub use heap::MinHeap;
pub use search::{SearchResult, UNREACHABLE, search, search_board};
