/// The base trait for any identifier that can name a variable in a problem.
///
/// This trait establishes the minimum requirements for a variable: it must be
/// cloneable, debuggable, equatable, and hashable, so it can key the domain
/// table and the constraint index. This is a marker trait, so any type that
/// satisfies these bounds implements `VariableKey`.
pub trait VariableKey: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> VariableKey for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// The base trait for any value that can appear in a variable's domain.
///
/// Values only need to be cloneable, debuggable, and equatable; predicates
/// supply all problem-specific meaning. This is a marker trait as well.
pub trait DomainValue: Clone + std::fmt::Debug + Eq + 'static {}
impl<T> DomainValue for T where T: Clone + std::fmt::Debug + Eq + 'static {}
