use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::anyhow;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 4, tags = ["2021", "bingo"])]
pub struct Solver;

pub const BOARD_SIZE: usize = 5;

#[derive(Debug, Clone, Copy)]
struct Spot {
    value: u32,
    marked: bool,
}

#[derive(Debug, Clone)]
pub struct Board {
    rows: [[Spot; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    fn mark(&mut self, draw: u32) {
        for row in self.rows.iter_mut() {
            for spot in row.iter_mut() {
                if spot.value == draw {
                    spot.marked = true;
                }
            }
        }
    }

    /// Rows and columns win; diagonals never do.
    fn is_winning(&self) -> bool {
        let any_row = self
            .rows
            .iter()
            .any(|row| row.iter().all(|spot| spot.marked));
        let any_column =
            (0..BOARD_SIZE).any(|col| self.rows.iter().all(|row| row[col].marked));
        any_row || any_column
    }

    fn unmarked_sum(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .filter(|spot| !spot.marked)
            .map(|spot| u64::from(spot.value))
            .sum()
    }
}

#[derive(Debug)]
pub struct SharedData {
    draws: Vec<u32>,
    boards: Vec<Board>,
    /// Scores of winning boards in the order they won, filled on first use
    winning_scores: Option<Vec<u64>>,
}

impl AdventParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.trim().lines().filter(|line| !line.trim().is_empty());

        let draws = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("no draw line".into()))?
            .split(',')
            .map(|n| {
                n.trim()
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidFormat(format!("invalid draw {:?}", n)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows: Vec<[Spot; BOARD_SIZE]> = lines
            .map(parse_board_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if rows.is_empty() || rows.len() % BOARD_SIZE != 0 {
            return Err(ParseError::InvalidFormat(format!(
                "expected boards of {} rows, got {} rows total",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let boards = rows
            .chunks(BOARD_SIZE)
            .map(|chunk| Board {
                rows: chunk.try_into().expect("chunks are exactly BOARD_SIZE rows"),
            })
            .collect();

        Ok(SharedData {
            draws,
            boards,
            winning_scores: None,
        })
    }
}

fn parse_board_row(line: &str) -> Result<[Spot; BOARD_SIZE], anyhow::Error> {
    let spots = line
        .split_whitespace()
        .map(|n| {
            n.parse::<u32>()
                .map(|value| Spot {
                    value,
                    marked: false,
                })
                .map_err(|_| anyhow!("invalid board number {:?}", n))
        })
        .collect::<Result<Vec<_>, _>>()?;
    spots
        .try_into()
        .map_err(|v: Vec<Spot>| anyhow!("expected {} numbers per row, got {}", BOARD_SIZE, v.len()))
}

/// Play the whole game once, recording each board's score as it wins.
fn winning_scores(shared: &mut SharedData) -> &[u64] {
    let SharedData {
        draws,
        boards,
        winning_scores,
    } = shared;

    winning_scores.get_or_insert_with(|| {
        let mut boards = boards.clone();
        let mut won = vec![false; boards.len()];
        let mut scores = Vec::new();

        for &draw in draws.iter() {
            for (board_idx, board) in boards.iter_mut().enumerate() {
                if won[board_idx] {
                    continue;
                }
                board.mark(draw);
                if board.is_winning() {
                    won[board_idx] = true;
                    scores.push(board.unmarked_sum() * u64::from(draw));
                }
            }
        }
        scores
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winning_scores(shared)
            .first()
            .map(u64::to_string)
            .ok_or_else(|| {
                SolveError::SolveFailed(anyhow!("no board wins with the given draws").into())
            })
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winning_scores(shared)
            .last()
            .map(u64::to_string)
            .ok_or_else(|| {
                SolveError::SolveFailed(anyhow!("no board wins with the given draws").into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7";

    #[test]
    fn part_1_first_winning_board() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "4512");
    }

    #[test]
    fn part_2_last_winning_board() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "1924");
    }

    #[test]
    fn column_marks_win() {
        let mut shared =
            Solver::parse("1,6,11,16,21\n 1  2  3  4  5\n 6  7  8  9 10\n11 12 13 14 15\n16 17 18 19 20\n21 22 23 24 25")
                .unwrap();
        // First column completes on the last draw: unmarked sum 270, draw 21
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "5670");
    }

    #[test]
    fn rejects_ragged_boards() {
        assert!(Solver::parse("1,2\n1 2 3 4 5\n1 2 3").is_err());
    }
}
