use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{ConfigurationError, Result},
    solver::{
        constraint::Constraint,
        value::{DomainValue, VariableKey},
    },
};

pub type ConstraintId = usize;

/// A single instance of a constraint satisfaction problem.
///
/// A `Problem` owns the variable set, the domain of candidate values for
/// every variable, and the registered constraints, together with an index
/// from each variable to the constraints that reference it. Once populated
/// it is read-only: the solver never mutates a problem, so one instance can
/// back any number of [`solve`](crate::solver::engine::SolverEngine::solve)
/// calls.
///
/// The variable set and its order are captured from the domain mapping
/// passed to [`Problem::new`]. That order is the solver's branching order,
/// so callers control determinism by controlling it.
#[derive(Debug, Clone)]
pub struct Problem<V: VariableKey, D: DomainValue> {
    variables: Vec<V>,
    domains: HashMap<V, Vec<D>>,
    constraints: Vec<Constraint<V, D>>,
    index: HashMap<V, Vec<ConstraintId>>,
}

impl<V: VariableKey, D: DomainValue> Problem<V, D> {
    /// Creates a problem from a mapping of variables to their candidate
    /// values, in declaration order.
    ///
    /// The order of values within each domain is preserved and determines
    /// the order in which the solver tries candidates. A variable that
    /// appears twice keeps its original position but takes the later domain.
    pub fn new(domains: impl IntoIterator<Item = (V, Vec<D>)>) -> Self {
        let mut variables = Vec::new();
        let mut table = HashMap::new();
        for (variable, domain) in domains {
            if table.insert(variable.clone(), domain).is_none() {
                variables.push(variable);
            }
        }
        Self {
            variables,
            domains: table,
            constraints: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers a constraint, indexing it under every variable it covers.
    ///
    /// Registration is validated up front: a constraint naming a variable
    /// that was never declared fails with a
    /// [`ConfigurationError`](crate::error::ConfigurationError) and leaves
    /// the problem exactly as it was. A constraint over `n` variables is
    /// reachable from `n` index buckets, so the consistency check only ever
    /// examines constraints relevant to the variable just bound.
    pub fn add_constraint(&mut self, constraint: Constraint<V, D>) -> Result<()> {
        if constraint.variables().is_empty() {
            return Err(ConfigurationError::EmptyVariableSet {
                constraint: constraint.descriptor().name,
            }
            .into());
        }
        for variable in constraint.variables() {
            if !self.domains.contains_key(variable) {
                return Err(ConfigurationError::UndeclaredVariable {
                    constraint: constraint.descriptor().name,
                    variable: format!("{variable:?}"),
                }
                .into());
            }
        }

        let id = self.constraints.len();
        for variable in constraint.variables() {
            self.index.entry(variable.clone()).or_default().push(id);
        }
        debug!(id, name = %constraint.descriptor().name, "registered constraint");
        self.constraints.push(constraint);
        Ok(())
    }

    /// The declared variables, in declaration order.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// The candidate values for `variable`, in branching order.
    ///
    /// Returns an empty slice for an undeclared variable; a declared
    /// variable with an empty domain simply makes the problem unsatisfiable.
    pub fn domain(&self, variable: &V) -> &[D] {
        self.domains
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All registered constraints, indexable by [`ConstraintId`].
    pub fn constraints(&self) -> &[Constraint<V, D>] {
        &self.constraints
    }

    /// The ids of the constraints that reference `variable`.
    pub fn constraints_on(&self, variable: &V) -> &[ConstraintId] {
        self.index
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Problem;
    use crate::{
        error::{ConfigurationError, Error},
        solver::{assignment::Assignment, constraint::Constraint},
    };

    fn two_colour_problem() -> Problem<&'static str, i32> {
        Problem::new([("a", vec![1, 2]), ("b", vec![1, 2])])
    }

    fn differ(x: &'static str, y: &'static str) -> Constraint<&'static str, i32> {
        Constraint::new(vec![x, y], move |assignment: &Assignment<&str, i32>| {
            match (assignment.get(&x), assignment.get(&y)) {
                (Some(a), Some(b)) => a != b,
                _ => true,
            }
        })
        .with_descriptor("differ", format!("{x} != {y}"))
    }

    #[test]
    fn declaration_order_is_preserved() {
        let problem = Problem::new([("c", vec![1]), ("a", vec![2]), ("b", vec![3])]);
        assert_eq!(problem.variables(), &["c", "a", "b"]);
        assert_eq!(problem.domain(&"a"), &[2]);
    }

    #[test]
    fn redeclaring_a_variable_keeps_its_position() {
        let problem = Problem::new([("a", vec![1]), ("b", vec![2]), ("a", vec![9])]);
        assert_eq!(problem.variables(), &["a", "b"]);
        assert_eq!(problem.domain(&"a"), &[9]);
    }

    #[test]
    fn constraints_are_indexed_under_every_variable() {
        let mut problem = two_colour_problem();
        problem.add_constraint(differ("a", "b")).unwrap();

        assert_eq!(problem.constraints_on(&"a"), &[0]);
        assert_eq!(problem.constraints_on(&"b"), &[0]);
        assert_eq!(problem.constraints().len(), 1);
    }

    #[test]
    fn undeclared_variable_is_rejected() {
        let mut problem = two_colour_problem();
        let err = problem.add_constraint(differ("a", "z")).unwrap_err();

        let Error::Configuration { inner, .. } = err;
        match *inner {
            ConfigurationError::UndeclaredVariable { variable, .. } => {
                assert_eq!(variable, "\"z\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn failed_registration_is_not_observable() {
        let mut problem = two_colour_problem();
        problem.add_constraint(differ("a", "b")).unwrap();
        problem.add_constraint(differ("a", "z")).unwrap_err();

        // The failed constraint left no trace in the store or the index.
        assert_eq!(problem.constraints().len(), 1);
        assert_eq!(problem.constraints_on(&"a"), &[0]);
        assert_eq!(problem.constraints_on(&"b"), &[0]);
    }

    #[test]
    fn empty_variable_set_is_rejected() {
        let mut problem = two_colour_problem();
        let constraint = Constraint::new(vec![], |_: &Assignment<&str, i32>| true);
        let err = problem.add_constraint(constraint).unwrap_err();

        let Error::Configuration { inner, .. } = err;
        assert!(matches!(
            *inner,
            ConfigurationError::EmptyVariableSet { .. }
        ));
    }

    #[test]
    fn undeclared_variable_yields_an_empty_domain() {
        let problem = two_colour_problem();
        assert!(problem.domain(&"z").is_empty());
        assert!(problem.constraints_on(&"z").is_empty());
    }
}
