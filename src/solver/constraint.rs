use std::sync::Arc;

use crate::solver::{
    assignment::Assignment,
    value::{DomainValue, VariableKey},
};

#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// The satisfaction predicate of a constraint, evaluated against the full
/// current partial assignment.
pub type SatisfactionPredicate<V, D> = Arc<dyn Fn(&Assignment<V, D>) -> bool + Send + Sync>;

/// A rule over one or more variables, checked via a predicate.
///
/// A constraint is plain data (the ordered list of variables it covers)
/// paired with an injected predicate. There is no constraint type hierarchy:
/// problem-specific behaviour is composed in by the caller, and the solver
/// only ever asks whether the constraint is [`satisfied`](Constraint::satisfied).
///
/// Predicates are expected to treat any of the constraint's variables that
/// are absent from the assignment as "not yet violated" and return `true`.
/// The engine invokes predicates against partial assignments and relies on
/// this convention, but does not enforce it.
#[derive(Clone)]
pub struct Constraint<V: VariableKey, D: DomainValue> {
    variables: Vec<V>,
    predicate: SatisfactionPredicate<V, D>,
    descriptor: ConstraintDescriptor,
}

impl<V: VariableKey, D: DomainValue> Constraint<V, D> {
    /// Creates a constraint over `variables`, satisfied whenever `predicate`
    /// returns `true` for the current assignment.
    pub fn new<F>(variables: Vec<V>, predicate: F) -> Self
    where
        F: Fn(&Assignment<V, D>) -> bool + Send + Sync + 'static,
    {
        let descriptor = ConstraintDescriptor {
            name: "predicate".to_string(),
            description: format!("{variables:?}"),
        };
        Self {
            variables,
            predicate: Arc::new(predicate),
            descriptor,
        }
    }

    /// Replaces the default descriptor, used in logs and the stats table.
    pub fn with_descriptor(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.descriptor = ConstraintDescriptor {
            name: name.into(),
            description: description.into(),
        };
        self
    }

    /// The variables this constraint covers, in the order they were given.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        self.descriptor.clone()
    }

    /// Evaluates the predicate against `assignment`.
    pub fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        (self.predicate)(assignment)
    }
}

impl<V: VariableKey, D: DomainValue> std::fmt::Debug for Constraint<V, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.descriptor.name)
            .field("variables", &self.variables)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Constraint;
    use crate::solver::assignment::Assignment;

    #[test]
    fn satisfied_delegates_to_the_predicate() {
        let constraint = Constraint::new(vec!["a"], |assignment: &Assignment<&str, i32>| {
            assignment.get(&"a") != Some(&0)
        });

        let mut assignment = Assignment::new();
        assert!(constraint.satisfied(&assignment));

        assignment.bind("a", 0);
        assert!(!constraint.satisfied(&assignment));
    }

    #[test]
    fn descriptor_round_trips() {
        let constraint = Constraint::new(vec!["a", "b"], |_: &Assignment<&str, i32>| true)
            .with_descriptor("pair", "a and b");
        assert_eq!(constraint.descriptor().name, "pair");
        assert_eq!(constraint.descriptor().description, "a and b");
        assert_eq!(constraint.variables(), &["a", "b"]);
    }
}
