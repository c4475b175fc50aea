use crate::{
    error::Result,
    solver::{assignment::Assignment, constraint::Constraint, problem::Problem},
};

/// A queen's row, `1..=n`. One queen is placed per row, so rows are the
/// problem's variables.
pub type Row = i32;

/// The column a queen occupies, `1..=n`.
pub type Column = i32;

/// A non-attack constraint between the queens on rows `a` and `b`: they may
/// not share a column or a diagonal. Until both queens are placed the
/// constraint is trivially satisfied.
pub fn non_attack_constraint(a: Row, b: Row) -> Constraint<Row, Column> {
    Constraint::new(vec![a, b], move |assignment: &Assignment<Row, Column>| {
        let (Some(&col_a), Some(&col_b)) = (assignment.get(&a), assignment.get(&b)) else {
            return true;
        };
        col_a != col_b && (col_a - col_b).abs() != (a - b).abs()
    })
    .with_descriptor("non-attack", format!("queens {a} and {b}"))
}

/// Builds the N-queens problem: `n` rows, each choosing a column, with a
/// pairwise non-attack constraint between every two rows.
pub fn queens_problem(n: i32) -> Result<Problem<Row, Column>> {
    let columns: Vec<Column> = (1..=n).collect();
    let mut problem = Problem::new((1..=n).map(|row| (row, columns.clone())));
    for a in 1..=n {
        for b in (a + 1)..=n {
            problem.add_constraint(non_attack_constraint(a, b))?;
        }
    }
    Ok(problem)
}

/// Renders a solved board, one queen per row.
pub fn render_board(assignment: &Assignment<Row, Column>, n: i32) -> String {
    let mut board = String::new();
    for row in 1..=n {
        for col in 1..=n {
            board.push(if assignment.get(&row) == Some(&col) {
                'Q'
            } else {
                '.'
            });
        }
        board.push('\n');
    }
    board
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{queens_problem, render_board};
    use crate::solver::{assignment::Assignment, engine::SolverEngine};

    #[test]
    fn eight_queens_has_a_valid_solution() {
        let problem = queens_problem(8).unwrap();
        let solution = SolverEngine::new()
            .solve(&problem, Assignment::new())
            .expect("eight queens is solvable");

        assert_eq!(solution.len(), 8);
        for a in 1..=8 {
            for b in (a + 1)..=8 {
                let col_a = *solution.get(&a).unwrap();
                let col_b = *solution.get(&b).unwrap();
                assert_ne!(col_a, col_b, "rows {a} and {b} share a column");
                assert_ne!(
                    (col_a - col_b).abs(),
                    (a - b).abs(),
                    "rows {a} and {b} share a diagonal"
                );
            }
        }
    }

    #[test]
    fn three_queens_is_unsatisfiable() {
        let problem = queens_problem(3).unwrap();
        assert!(SolverEngine::new()
            .solve(&problem, Assignment::new())
            .is_none());
    }

    #[test]
    fn board_renders_one_queen_per_row() {
        let problem = queens_problem(4).unwrap();
        let solution = SolverEngine::new()
            .solve(&problem, Assignment::new())
            .expect("four queens is solvable");

        let board = render_board(&solution, 4);
        assert_eq!(board.lines().count(), 4);
        for line in board.lines() {
            assert_eq!(line.len(), 4);
            assert_eq!(line.matches('Q').count(), 1);
        }
    }

    #[test]
    fn solutions_are_deterministic() {
        let engine = SolverEngine::new();
        let first = engine
            .solve(&queens_problem(8).unwrap(), Assignment::new())
            .unwrap();
        let second = engine
            .solve(&queens_problem(8).unwrap(), Assignment::new())
            .unwrap();
        assert_eq!(first, second);
    }
}
