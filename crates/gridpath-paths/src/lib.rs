//! Search algorithms for gridpath grids.
//!
//! Four classical graph searches over 4-connected, unit-cost grids:
//!
//! - **BFS**: FIFO frontier, shortest path in edges ([`bfs`])
//! - **DFS**: LIFO frontier, any simple path ([`dfs`])
//! - **Dijkstra**: uniform-cost priority frontier ([`dijkstra`])
//! - **A\***: priority `g + manhattan` ([`astar`])
//!
//! Every search is a pure function from an immutable [`Grid`] snapshot to a
//! [`SearchResult`] recording the path and the order in which cells were
//! finalized. All four share the *visited-on-pop* discipline: a cell is
//! finalized when it leaves the frontier, not when it enters it, so a cell
//! may be queued several times and only its first pop counts.
//!
//! # Frontiers
//!
//! | Frontier | Pop order | Used by |
//! |---|---|---|
//! | [`Fifo`] | oldest first | BFS |
//! | [`Lifo`] | newest first | DFS |
//! | [`MinQueue`] | lowest priority, then oldest | Dijkstra, A* |
//!
//! [`Grid`]: gridpath_core::Grid

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod neighbors;
mod result;
mod visits;

pub use algorithm::{Algorithm, run, run_checked, search};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use frontier::{Fifo, Frontier, Lifo, MinQueue, Prioritized};
pub use neighbors::{Neighbors, neighbors};
pub use result::SearchResult;
