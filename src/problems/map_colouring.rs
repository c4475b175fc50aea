use serde::Serialize;

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        constraint::Constraint,
        problem::Problem,
        value::VariableKey,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Colour {
    Red,
    Yellow,
    Blue,
    Green,
}

impl Colour {
    pub const ALL: [Colour; 4] = [Colour::Red, Colour::Yellow, Colour::Blue, Colour::Green];
}

pub type Province = &'static str;

/// The Canadian provinces and territories, in declaration order.
pub const CANADA: [Province; 13] = [
    "Yukon",
    "British Columbia",
    "Northwest Territories",
    "Nunavut",
    "Alberta",
    "Saskatchewan",
    "Manitoba",
    "Ontario",
    "Quebec",
    "Newfoundland and Labrador",
    "New Brunswick",
    "Nova Scotia",
    "Prince Edward Island",
];

/// Land borders between the regions of [`CANADA`].
pub fn borders() -> Vec<(Province, Province)> {
    vec![
        ("Yukon", "British Columbia"),
        ("Yukon", "Northwest Territories"),
        ("British Columbia", "Alberta"),
        ("British Columbia", "Northwest Territories"),
        ("Northwest Territories", "Alberta"),
        ("Alberta", "Saskatchewan"),
        ("Saskatchewan", "Northwest Territories"),
        ("Nunavut", "Northwest Territories"),
        ("Saskatchewan", "Manitoba"),
        ("Manitoba", "Nunavut"),
        ("Manitoba", "Ontario"),
        ("Ontario", "Quebec"),
        ("Newfoundland and Labrador", "Quebec"),
        ("Newfoundland and Labrador", "Prince Edward Island"),
        ("Newfoundland and Labrador", "New Brunswick"),
        ("Newfoundland and Labrador", "Nova Scotia"),
        ("New Brunswick", "Quebec"),
        ("Nova Scotia", "New Brunswick"),
        ("Prince Edward Island", "New Brunswick"),
        ("Nova Scotia", "Prince Edward Island"),
    ]
}

/// A border constraint: the two regions may not take the same colour.
///
/// Until both regions are coloured the constraint is trivially satisfied.
pub fn border_constraint<V: VariableKey + Send + Sync>(us: V, them: V) -> Constraint<V, Colour> {
    let description = format!("{us:?} != {them:?}");
    let variables = vec![us.clone(), them.clone()];
    Constraint::new(variables, move |assignment: &Assignment<V, Colour>| {
        match (assignment.get(&us), assignment.get(&them)) {
            (Some(ours), Some(theirs)) => ours != theirs,
            _ => true,
        }
    })
    .with_descriptor("border", description)
}

/// Builds the Canada map-colouring problem over the given palette.
pub fn canada_problem(palette: &[Colour]) -> Result<Problem<Province, Colour>> {
    let mut problem = Problem::new(CANADA.map(|province| (province, palette.to_vec())));
    for (us, them) in borders() {
        problem.add_constraint(border_constraint(us, them))?;
    }
    Ok(problem)
}
