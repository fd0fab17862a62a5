//! # mixupcube
//! `mixupcube`: crate for representing and solving the 3x3x3 Mixup Cube, a
//! Rubik's-cube variant whose middle slices turn in 45-degree steps and
//! whose face centers can occupy edge slots.

#[macro_use]
extern crate lazy_static;

/// Error type shared across parsing, heuristic IO and solving.
pub mod error;

/// Fixed turn-count and move-avoidance constants.
pub mod constants;

/// The 26-cubie cube representation and its solved/cube-shape predicates.
pub mod cube;

/// The 39 turn operators.
pub mod turn;

/// Explicit LIFO used by both heuristic generation and the solver.
pub mod stack;

/// Sentinel-encoded list of solutions.
pub mod solution;

/// Admissible pruning heuristics: hashing, BFS generation, persistence.
pub mod heuristic;

/// Iterative-deepening solver.
pub mod solver;

/// Scramble generation and move-string parsing/rendering.
pub mod scramble;
