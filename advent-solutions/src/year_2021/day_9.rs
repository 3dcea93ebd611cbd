use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::HashSet;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 9, tags = ["2021", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct HeightMap {
    heights: Vec<Vec<u8>>,
}

impl HeightMap {
    fn get(&self, row: isize, column: isize) -> Option<u8> {
        if row < 0 || column < 0 {
            return None;
        }
        self.heights
            .get(row as usize)
            .and_then(|r| r.get(column as usize))
            .copied()
    }

    fn neighbours(row: isize, column: isize) -> [(isize, isize); 4] {
        [
            (row - 1, column),
            (row + 1, column),
            (row, column - 1),
            (row, column + 1),
        ]
    }

    /// Cells strictly lower than all of their existing neighbours.
    fn low_points(&self) -> Vec<(isize, isize)> {
        let mut low_points = Vec::new();
        for (row, heights_row) in self.heights.iter().enumerate() {
            for (column, &height) in heights_row.iter().enumerate() {
                let (row, column) = (row as isize, column as isize);
                let is_low = Self::neighbours(row, column)
                    .into_iter()
                    .filter_map(|(r, c)| self.get(r, c))
                    .all(|neighbour| neighbour > height);
                if is_low {
                    low_points.push((row, column));
                }
            }
        }
        low_points
    }

    /// Size of the basin grown from a low point: neighbours join when they
    /// are higher than the cell they were reached from and not height 9.
    fn basin_size(&self, start: (isize, isize)) -> usize {
        let mut seen = HashSet::from([start]);
        let mut frontier = vec![start];

        while let Some((row, column)) = frontier.pop() {
            let height = self
                .get(row, column)
                .expect("frontier cells are always in bounds");
            for (r, c) in Self::neighbours(row, column) {
                match self.get(r, c) {
                    Some(neighbour) if neighbour != 9 && neighbour > height => {
                        if seen.insert((r, c)) {
                            frontier.push((r, c));
                        }
                    }
                    _ => {}
                }
            }
        }
        seen.len()
    }
}

impl AdventParser for Solver {
    type SharedData<'a> = HeightMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let heights = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .chars()
                    .map(|c| {
                        c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                            ParseError::InvalidFormat(format!(
                                "(line {}) invalid height {:?}",
                                line_idx + 1,
                                c
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        if heights.is_empty() {
            return Err(ParseError::MissingData("empty height map".into()));
        }
        Ok(HeightMap { heights })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let risk: u64 = shared
            .low_points()
            .into_iter()
            .map(|(r, c)| u64::from(shared.get(r, c).expect("low points are in bounds")) + 1)
            .sum();
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared
            .low_points()
            .into_iter()
            .map(|low_point| shared.basin_size(low_point) as u64)
            .sorted_unstable()
            .rev()
            .take(3)
            .product();
        Ok(product.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2199943210\n3987894921\n9856789892\n8767896789\n9899965678";

    #[test]
    fn finds_low_points() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.low_points().len(), 4);
    }

    #[test]
    fn part_1_sums_risk_levels() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "15");
    }

    #[test]
    fn part_2_multiplies_three_largest_basins() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "1134");
    }

    #[test]
    fn rejects_non_digit_heights() {
        assert!(Solver::parse("12a").is_err());
    }
}
