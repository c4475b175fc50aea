use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

use crate::{
    error::Result,
    solver::{assignment::Assignment, constraint::Constraint, problem::Problem},
};

pub type Word = &'static str;

/// A cell on the puzzle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

/// One candidate placement of a word: the cells its letters occupy, in
/// letter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub points: Vec<Point>,
}

/// The eight directions a word can run in.
const ORIENTATIONS: [Point; 8] = [
    Point { row: 1, col: 0 },
    Point { row: -1, col: 0 },
    Point { row: 0, col: -1 },
    Point { row: 0, col: 1 },
    Point { row: 1, col: -1 },
    Point { row: -1, col: -1 },
    Point { row: 1, col: 1 },
    Point { row: -1, col: 1 },
];

fn placement_points(start: Point, word: Word, step: Point, grid_size: i32) -> Option<Vec<Point>> {
    let len = word.len() as i32;
    let end_row = start.row + step.row * (len - 1);
    let end_col = start.col + step.col * (len - 1);

    if end_row < 0 || end_row >= grid_size || end_col < 0 || end_col >= grid_size {
        return None;
    }

    Some(
        (0..len)
            .map(|ndx| Point {
                row: start.row + step.row * ndx,
                col: start.col + step.col * ndx,
            })
            .collect(),
    )
}

/// Enumerates every placement of `word` that fits on the grid: one per
/// in-bounds combination of start cell and orientation, in scan order.
pub fn generate_placements(word: Word, grid_size: i32) -> Vec<Placement> {
    let mut out = Vec::new();
    for row in 0..grid_size {
        for col in 0..grid_size {
            let start = Point { row, col };
            for step in ORIENTATIONS {
                if let Some(points) = placement_points(start, word, step, grid_size) {
                    out.push(Placement { points });
                }
            }
        }
    }
    out
}

/// The overlap constraint for one word: wherever its placement crosses
/// another word's placement, the two must put the same letter in the shared
/// cell. A word not yet placed leaves the constraint satisfied.
pub fn overlap_constraint(word: Word) -> Constraint<Word, Placement> {
    Constraint::new(
        vec![word],
        move |assignment: &Assignment<Word, Placement>| {
            let Some(placement) = assignment.get(&word) else {
                return true;
            };

            for (other, other_placement) in assignment.iter() {
                if *other == word {
                    continue;
                }
                for (i, point) in other_placement.points.iter().enumerate() {
                    for (j, next_point) in placement.points.iter().enumerate() {
                        if point == next_point && word.as_bytes()[j] != other.as_bytes()[i] {
                            return false;
                        }
                    }
                }
            }

            true
        },
    )
    .with_descriptor("overlap", word)
}

/// Builds the word-search placement problem.
///
/// Each word's candidate placements are shuffled with the caller's RNG
/// before they become the word's domain. Branching order follows domain
/// order, so the shuffle is what varies the produced grid from seed to
/// seed; the search itself stays deterministic.
pub fn placement_problem(
    words: &[Word],
    grid_size: i32,
    rng: &mut impl Rng,
) -> Result<Problem<Word, Placement>> {
    let mut problem = Problem::new(words.iter().map(|&word| {
        let mut placements = generate_placements(word, grid_size);
        placements.shuffle(rng);
        (word, placements)
    }));
    for &word in words {
        problem.add_constraint(overlap_constraint(word))?;
    }
    Ok(problem)
}

/// Renders a solved puzzle. Placed letters are uppercase; every other cell
/// is filled with a random lowercase letter.
pub fn render_grid(
    assignment: &Assignment<Word, Placement>,
    grid_size: i32,
    rng: &mut impl Rng,
) -> String {
    let size = grid_size as usize;
    let mut grid = vec![vec![' '; size]; size];
    for line in grid.iter_mut() {
        for cell in line.iter_mut() {
            *cell = (b'a' + rng.gen_range(0..26)) as char;
        }
    }

    for (word, placement) in assignment.iter() {
        for (ndx, point) in placement.points.iter().enumerate() {
            grid[point.row as usize][point.col as usize] =
                word.as_bytes()[ndx].to_ascii_uppercase() as char;
        }
    }

    grid.into_iter()
        .map(|line| line.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
