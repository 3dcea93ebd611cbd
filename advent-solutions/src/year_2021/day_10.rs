use crate::utils::chunks::{self, Outcome, Token};
use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 10, tags = ["2021", "chunks"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    lines: Vec<Vec<Token>>,
    outcomes: Option<Vec<Outcome>>,
}

impl AdventParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .chars()
                    .map(|c| {
                        Token::from_char(c).ok_or_else(|| {
                            ParseError::InvalidFormat(format!(
                                "(line {}) character {:?} is not a bracket",
                                line_idx + 1,
                                c
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData {
            lines,
            outcomes: None,
        })
    }
}

/// Classify every line once; both parts read the same outcomes.
fn outcomes(shared: &mut SharedData) -> &[Outcome] {
    let SharedData { lines, outcomes } = shared;
    outcomes.get_or_insert_with(|| lines.iter().map(|line| chunks::classify(line)).collect())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(chunks::corruption_score(outcomes(shared)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        chunks::median_completion_score(outcomes(shared))
            .map(|score| score.to_string())
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]";

    #[test]
    fn part_1_total_syntax_error_score() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "26397"
        );
    }

    #[test]
    fn part_2_middle_completion_score() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "288957"
        );
    }

    #[test]
    fn part_2_fails_loudly_on_even_incomplete_count() {
        let mut shared = Solver::parse("([{\n<<").unwrap();
        assert!(matches!(
            <Solver as PartSolver<2>>::solve(&mut shared),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert!(Solver::parse("(a)").is_err());
    }
}
