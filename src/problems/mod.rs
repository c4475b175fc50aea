//! Ready-made problem definitions built on top of the solver.
//!
//! Each module is an ordinary client of the engine: it supplies the domain
//! mapping and the constraint predicates, and leaves searching to
//! [`SolverEngine`](crate::solver::engine::SolverEngine).
pub mod map_colouring;
pub mod n_queens;
pub mod word_search;
