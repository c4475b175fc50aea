use prettytable::{Cell, Row, Table};

use crate::solver::{
    engine::{PerConstraintStats, SearchStats},
    problem::{ConstraintId, Problem},
    value::{DomainValue, VariableKey},
};

/// Renders a per-constraint summary of one search as a text table.
///
/// Constraints that were never checked do not appear.
pub fn render_stats_table<V: VariableKey, D: DomainValue>(
    stats: &SearchStats,
    problem: &Problem<V, D>,
) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Checks"),
        Cell::new("Violations"),
        Cell::new("Time / Check (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|a| a.1.time_spent_micros);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = problem.constraints()[*constraint_id].descriptor();
        let avg_time = if constraint_stats.checks > 0 {
            constraint_stats.time_spent_micros as f64 / constraint_stats.checks as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.checks.to_string()),
            Cell::new(&constraint_stats.violations.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::render_stats_table;
    use crate::solver::{
        assignment::Assignment, constraint::Constraint, engine::SolverEngine, problem::Problem,
    };

    #[test]
    fn table_lists_checked_constraints_by_name() {
        let mut problem = Problem::new([("a", vec![1, 2]), ("b", vec![1, 2])]);
        problem
            .add_constraint(
                Constraint::new(vec!["a", "b"], |assignment: &Assignment<&str, i32>| {
                    match (assignment.get(&"a"), assignment.get(&"b")) {
                        (Some(x), Some(y)) => x != y,
                        _ => true,
                    }
                })
                .with_descriptor("differ", "a != b"),
            )
            .unwrap();

        let (solution, stats) = SolverEngine::new().solve_with_stats(&problem, Assignment::new());
        assert!(solution.is_some());

        let rendered = render_stats_table(&stats, &problem);
        assert!(rendered.contains("differ"));
        assert!(rendered.contains("a != b"));
    }
}
