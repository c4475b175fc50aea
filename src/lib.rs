//! Necto is a generic, reusable constraint satisfaction problem (CSP) solver.
//!
//! A CSP is a set of variables, a domain of candidate values for each
//! variable, and a set of constraints over subsets of the variables. The
//! engine finds one assignment of values to variables that satisfies every
//! constraint, or reports that none exists.
//!
//! # Core Concepts
//!
//! - **[`Problem`](solver::problem::Problem)**: owns the variables, their
//!   domains, and the registered constraints, indexed by the variables they
//!   reference.
//! - **[`Constraint`](solver::constraint::Constraint)**: an ordered set of
//!   variables paired with a satisfaction predicate. Predicates are plain
//!   closures over the current partial assignment; a predicate should treat
//!   any of its variables that are not yet bound as "not yet violated".
//! - **[`SolverEngine`](solver::engine::SolverEngine)**: a depth-first
//!   backtracking search. Variables are tried in declaration order and
//!   values in domain order, so solving is fully deterministic; callers that
//!   want variety shuffle the domains before building the problem.
//!
//! The engine returns the first complete solution it finds. It does not
//! enumerate all solutions, rank them, or prune domains ahead of the search.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Here is a simple example of solving for `a != b` where `a` can be `1` or
//! `2`, and `b` can only be `1`. The solver should deduce that `a` must be
//! `2`.
//!
//! ```
//! use necto::solver::assignment::Assignment;
//! use necto::solver::constraint::Constraint;
//! use necto::solver::engine::SolverEngine;
//! use necto::solver::problem::Problem;
//!
//! // 1. Declare the variables and their domains, in order.
//! let mut problem = Problem::new([("a", vec![1, 2]), ("b", vec![1])]);
//!
//! // 2. Register the constraints.
//! problem
//!     .add_constraint(Constraint::new(
//!         vec!["a", "b"],
//!         |assignment: &Assignment<&str, i32>| {
//!             match (assignment.get(&"a"), assignment.get(&"b")) {
//!                 (Some(x), Some(y)) => x != y,
//!                 // A variable not yet bound leaves the constraint satisfied.
//!                 _ => true,
//!             }
//!         },
//!     ))
//!     .unwrap();
//!
//! // 3. Solve, starting from an empty assignment.
//! let solution = SolverEngine::new()
//!     .solve(&problem, Assignment::new())
//!     .expect("a solution exists");
//!
//! assert_eq!(solution.get(&"a"), Some(&2));
//! assert_eq!(solution.get(&"b"), Some(&1));
//! ```
//!
//! Ready-made problem definitions (map colouring, N-queens, word search)
//! live in the [`problems`] module.
pub mod error;
pub mod problems;
pub mod solver;
