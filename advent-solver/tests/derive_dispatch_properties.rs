//! Property-based tests for the AdventSolver derive macro

use advent_solver::{AdventParser, AdventSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

#[derive(AdventSolver)]
#[advent_solver(max_parts = 2)]
struct TestSolver;

impl AdventParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat("bad int".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any valid part number N in 1..=PARTS, `Solver::solve_part(shared, N)`
    /// produces the same result as `<Self as PartSolver<N>>::solve(shared)`.
    #[test]
    fn solve_part_dispatches_to_correct_part_solver(
        numbers in prop::collection::vec(1i32..10, 1..5),
        part in 1u8..=2
    ) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let mut shared1 = <TestSolver as AdventParser>::parse(&input).unwrap();
        let mut shared2 = <TestSolver as AdventParser>::parse(&input).unwrap();

        let solver_result = <TestSolver as Solver>::solve_part(&mut shared1, part);

        let direct_result = match part {
            1 => <TestSolver as PartSolver<1>>::solve(&mut shared2),
            2 => <TestSolver as PartSolver<2>>::solve(&mut shared2),
            _ => unreachable!(),
        };

        prop_assert_eq!(solver_result.unwrap(), direct_result.unwrap());
    }

    /// Any part number outside 1..=PARTS is rejected with PartNotImplemented.
    #[test]
    fn invalid_parts_are_rejected(part in 3u8..=255) {
        let mut shared = <TestSolver as AdventParser>::parse("1\n2\n3").unwrap();
        let result = <TestSolver as Solver>::solve_part(&mut shared, part);
        match result {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }
}
