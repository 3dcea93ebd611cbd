use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::Context;
use itertools::Itertools;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 1, tags = ["2021", "windows"])]
pub struct Solver;

impl AdventParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<u32>()
                    .with_context(|| format!("(line {}) invalid depth reading", line_idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared.iter().copied()).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let window_sums = shared.windows(3).map(|w| w.iter().sum::<u32>());
        Ok(count_increases(window_sums).to_string())
    }
}

fn count_increases(depths: impl Iterator<Item = u32>) -> usize {
    depths
        .tuple_windows()
        .filter(|(previous, current)| current > previous)
        .count()
}
