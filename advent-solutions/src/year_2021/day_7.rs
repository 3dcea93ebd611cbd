use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::anyhow;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 7, tags = ["2021", "optimization"])]
pub struct Solver;

impl AdventParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|n| {
                n.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat(format!("invalid position {:?}", n)))
            })
            .collect()
    }
}

/// Cheapest total fuel over every candidate alignment position in
/// `0..=max(positions)`.
fn min_total_fuel(
    positions: &[i64],
    fuel_for_distance: impl Fn(i64) -> i64,
) -> Result<i64, SolveError> {
    let max = positions.iter().copied().max().ok_or_else(|| {
        SolveError::SolveFailed(anyhow!("no crab positions to align").into())
    })?;

    (0..=max)
        .map(|target| {
            positions
                .iter()
                .map(|position| fuel_for_distance((position - target).abs()))
                .sum()
        })
        .min()
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("empty candidate range").into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_total_fuel(shared, |distance| distance).map(|fuel| fuel.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Each step costs one more than the last: triangular sum
        min_total_fuel(shared, |distance| distance * (distance + 1) / 2)
            .map(|fuel| fuel.to_string())
    }
}
