use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, trace};

use crate::solver::{
    assignment::Assignment,
    problem::{ConstraintId, Problem},
    value::{DomainValue, VariableKey},
};

/// Counters for the work a single constraint did during one search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerConstraintStats {
    /// How many times the constraint's predicate was evaluated.
    pub checks: u64,
    /// How many of those evaluations reported a violation.
    pub violations: u64,
    /// Total time spent inside the predicate, in microseconds.
    pub time_spent_micros: u64,
}

/// Statistics collected over one invocation of the solver.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Candidate bindings tried, across all depths.
    pub nodes: u64,
    /// Candidate bindings undone, either on an immediate inconsistency or
    /// after the subtree below them was exhausted.
    pub backtracks: u64,
    /// Per-constraint evaluation counters, keyed by [`ConstraintId`].
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

impl SearchStats {
    fn record_check(&mut self, id: ConstraintId, satisfied: bool, elapsed: std::time::Duration) {
        let entry = self.constraint_stats.entry(id).or_default();
        entry.checks += 1;
        if !satisfied {
            entry.violations += 1;
        }
        entry.time_spent_micros += elapsed.as_micros() as u64;
    }
}

/// The engine for solving constraint satisfaction problems.
///
/// The `SolverEngine` takes a [`Problem`] (variables, their domains, and
/// the registered constraints) and runs a depth-first backtracking search
/// for one assignment that satisfies every constraint.
///
/// The search is deliberately plain: variables are selected in declaration
/// order and values in domain order, with no dynamic heuristics and no
/// propagation between assignments. Given the same problem, the engine
/// always explores the same tree and returns the same solution, so callers
/// that want variety (or better branching) reorder the domains before
/// constructing the problem.
pub struct SolverEngine;

impl SolverEngine {
    /// Creates a new `SolverEngine`.
    pub fn new() -> Self {
        Self
    }

    /// Attempts to solve the given constraint satisfaction problem.
    ///
    /// Starting from `initial` (usually [`Assignment::new`], though callers
    /// may pre-bind variables they have already decided), the search extends
    /// the assignment one variable at a time and undoes every extension that
    /// cannot lead to a solution.
    ///
    /// # Returns
    ///
    /// * `Some(assignment)` if a complete solution is found; it binds every
    ///   declared variable and satisfies every registered constraint.
    /// * `None` if the search space is exhausted and the problem is
    ///   unsatisfiable. This is an ordinary negative result, not an error.
    pub fn solve<V: VariableKey, D: DomainValue>(
        &self,
        problem: &Problem<V, D>,
        initial: Assignment<V, D>,
    ) -> Option<Assignment<V, D>> {
        self.solve_with_stats(problem, initial).0
    }

    /// Like [`solve`](SolverEngine::solve), but also returns the
    /// [`SearchStats`] collected along the way.
    pub fn solve_with_stats<V: VariableKey, D: DomainValue>(
        &self,
        problem: &Problem<V, D>,
        initial: Assignment<V, D>,
    ) -> (Option<Assignment<V, D>>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut assignment = initial;
        let solved = self.search(problem, &mut assignment, &mut stats);
        debug!(
            solved,
            nodes = stats.nodes,
            backtracks = stats.backtracks,
            "search finished"
        );
        (solved.then_some(assignment), stats)
    }

    fn search<V: VariableKey, D: DomainValue>(
        &self,
        problem: &Problem<V, D>,
        assignment: &mut Assignment<V, D>,
        stats: &mut SearchStats,
    ) -> bool {
        // Base case: every declared variable is bound, so the assignment is
        // a complete solution. First found wins; no further search.
        if assignment.len() == problem.variables().len() {
            return true;
        }

        // Select the next unassigned variable, in declaration order.
        let Some(next) = problem
            .variables()
            .iter()
            .find(|variable| !assignment.contains(*variable))
            .cloned()
        else {
            // Only reachable if the caller seeded bindings outside the
            // declared variable set; every declared variable is bound.
            return true;
        };

        for value in problem.domain(&next) {
            trace!(variable = ?next, value = ?value, "trying candidate");
            stats.nodes += 1;
            assignment.bind(next.clone(), value.clone());
            if self.consistent(problem, &next, assignment, stats)
                && self.search(problem, assignment, stats)
            {
                return true;
            }
            // Restore the assignment before trying the next candidate.
            assignment.unbind(&next);
            stats.backtracks += 1;
        }

        // Every candidate for this variable failed: dead end, let the parent
        // try its own next candidate.
        false
    }

    /// Checks whether the assignment is consistent after binding `variable`.
    ///
    /// Only the constraints indexed under `variable` are evaluated, each
    /// against the full current assignment. Constraints on unrelated
    /// variables cannot have changed and are never re-examined.
    fn consistent<V: VariableKey, D: DomainValue>(
        &self,
        problem: &Problem<V, D>,
        variable: &V,
        assignment: &Assignment<V, D>,
        stats: &mut SearchStats,
    ) -> bool {
        problem.constraints_on(variable).iter().all(|&id| {
            let started = Instant::now();
            let satisfied = problem.constraints()[id].satisfied(assignment);
            stats.record_check(id, satisfied, started.elapsed());
            satisfied
        })
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new()
    }
}
