//! Example demonstrating manual solver registration
//!
//! Run with: cargo run --example manual_registry

use advent_solver::{
    AdventParser, ParseError, PartSolver, RegistryBuilder, SolveError, register_solver,
};
use advent_solver_macros::AdventSolver;

/// Counts lines for part 1 and characters for part 2.
#[derive(AdventSolver)]
#[advent_solver(max_parts = 2)]
struct CountingSolver;

impl AdventParser for CountingSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for CountingSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lines().count().to_string())
    }
}

impl PartSolver<2> for CountingSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().count().to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, CountingSolver, 2021, 1);
    let registry = builder.build();

    let input = "one\ntwo\nthree";
    let mut solver = registry.create_solver(2021, 1, input)?;

    for part in 1..=solver.parts() {
        let result = solver.solve(part)?;
        println!("Part {}: {} (took {:?})", part, result.answer, result.duration());
    }

    Ok(())
}
