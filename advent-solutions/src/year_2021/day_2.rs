use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::anyhow;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 2, tags = ["2021", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl AdventParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_command(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }
}

fn parse_command(line: &str) -> Result<Command, anyhow::Error> {
    let (direction, distance) = line
        .trim()
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<direction> <distance>'"))?;
    let distance: i64 = distance.trim().parse()?;

    match direction {
        "forward" => Ok(Command::Forward(distance)),
        "down" => Ok(Command::Down(distance)),
        "up" => Ok(Command::Up(distance)),
        other => Err(anyhow!("unknown direction {:?}", other)),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth) =
            shared
                .iter()
                .fold((0i64, 0i64), |(horizontal, depth), command| match command {
                    Command::Forward(d) => (horizontal + d, depth),
                    Command::Down(d) => (horizontal, depth + d),
                    Command::Up(d) => (horizontal, depth - d),
                });
        Ok((horizontal * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth, _aim) = shared.iter().fold(
            (0i64, 0i64, 0i64),
            |(horizontal, depth, aim), command| match command {
                Command::Forward(d) => (horizontal + d, depth + aim * d, aim),
                Command::Down(d) => (horizontal, depth, aim + d),
                Command::Up(d) => (horizontal, depth, aim - d),
            },
        );
        Ok((horizontal * depth).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2";

    #[test]
    fn parses_commands() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared[0], Command::Forward(5));
        assert_eq!(shared[1], Command::Down(5));
        assert_eq!(shared[3], Command::Up(3));
    }

    #[test]
    fn part_1_multiplies_position_and_depth() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "150");
    }

    #[test]
    fn part_2_tracks_aim() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "900");
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!(Solver::parse("backward 3").is_err());
    }
}
