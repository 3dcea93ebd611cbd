use advent_solver::{AdventParser, ParseError, PartSolver, SolveError, Solver, SolverExt};
use advent_solver_macros::AdventSolver;

#[derive(AdventSolver)]
#[advent_solver(max_parts = 2)]
struct TestSolver;

impl AdventParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
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

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(TestSolver::PARTS, 2);
}

#[test]
fn test_dispatch_matches_part_solvers() {
    let mut shared = TestSolver::parse("2\n3\n4").unwrap();
    assert_eq!(shared, vec![2, 3, 4]);

    let answer1 = TestSolver::solve_part(&mut shared, 1).unwrap();
    assert_eq!(answer1, "9");

    let answer2 = TestSolver::solve_part(&mut shared, 2).unwrap();
    assert_eq!(answer2, "24");
}

#[test]
fn test_unimplemented_part_rejected() {
    let mut shared = TestSolver::parse("1\n2").unwrap();
    let result = TestSolver::solve_part(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
}

#[test]
fn test_checked_range_rejects_out_of_range() {
    let mut shared = TestSolver::parse("1\n2").unwrap();
    let result = TestSolver::solve_part_checked_range(&mut shared, 0);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));

    let result = TestSolver::solve_part_checked_range(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}
