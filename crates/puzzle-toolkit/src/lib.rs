//! Grid traversal, constraint ordering and exhaustive search for small
//! text puzzles.
//!
//! The four search components are independent of each other:
//! [`walker`] explores paths on a grid, [`topo`] orders items under
//! before/after constraints, [`evaluator`] searches operator assignments
//! and [`collapser`] simulates large populations of identical entities.
//! [`puzzles`] parses puzzle input and wires the components together.

pub mod collapser;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod patrol;
pub mod puzzles;
pub mod topo;
pub mod walker;

// Re-export main types
pub use collapser::{simulate, simulate_multiset, EntityMultiset};
pub use config::SolveConfig;
pub use error::{Error, Result};
pub use evaluator::{evaluate, exists_assignment, Operator};
pub use grid::{Direction, Grid, Position};
pub use patrol::{loop_obstacles, patrol, Guard, PatrolMetrics, PatrolResult, PatrolStatus};
pub use puzzles::{solve, Answers, Parts, Puzzle};
pub use topo::{is_consistent, order, Constraint};
pub use walker::{
    count_distinct_paths, reachable_terminals, TraversalEvent, TraversalObserver,
};
