use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::anyhow;
use std::collections::HashMap;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 5, tags = ["2021", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vent {
    pub start: Point,
    pub end: Point,
}

impl Vent {
    fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    /// All integer points on the segment, endpoints included.
    ///
    /// Lines are horizontal, vertical, or at exactly 45 degrees, so a unit
    /// step per axis always lands on grid points.
    fn points(&self) -> impl Iterator<Item = Point> {
        let dx = (self.end.x - self.start.x).signum();
        let dy = (self.end.y - self.start.y).signum();
        let steps = (self.end.x - self.start.x)
            .abs()
            .max((self.end.y - self.start.y).abs());
        let start = self.start;

        (0..=steps).map(move |i| Point {
            x: start.x + i * dx,
            y: start.y + i * dy,
        })
    }
}

impl AdventParser for Solver {
    type SharedData<'a> = Vec<Vent>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_vent(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }
}

fn parse_vent(line: &str) -> Result<Vent, anyhow::Error> {
    let (start, end) = line
        .trim()
        .split_once(" -> ")
        .ok_or_else(|| anyhow!("expected 'x1,y1 -> x2,y2'"))?;
    Ok(Vent {
        start: parse_point(start)?,
        end: parse_point(end)?,
    })
}

fn parse_point(text: &str) -> Result<Point, anyhow::Error> {
    let (x, y) = text
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected 'x,y', got {:?}", text))?;
    Ok(Point {
        x: x.trim().parse()?,
        y: y.trim().parse()?,
    })
}

/// Rasterize the vents into a per-point count and tally overlapping points.
fn count_overlaps<'a>(vents: impl Iterator<Item = &'a Vent>) -> usize {
    let mut counts: HashMap<Point, u32> = HashMap::new();
    for vent in vents {
        for point in vent.points() {
            *counts.entry(point).or_insert(0) += 1;
        }
    }
    counts.values().filter(|&&count| count >= 2).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter().filter(|v| v.is_axis_aligned())).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2";

    fn points(vent: Vent) -> Vec<Point> {
        vent.points().collect()
    }

    #[test]
    fn horizontal_and_vertical_points() {
        let vent = parse_vent("0,9 -> 5,9").unwrap();
        assert_eq!(
            points(vent),
            (0..=5).map(|x| Point { x, y: 9 }).collect::<Vec<_>>()
        );

        let vent = parse_vent("9,5 -> 9,3").unwrap();
        assert_eq!(
            points(vent),
            vec![
                Point { x: 9, y: 5 },
                Point { x: 9, y: 4 },
                Point { x: 9, y: 3 },
            ]
        );
    }

    #[test]
    fn diagonal_points_step_both_axes() {
        let vent = parse_vent("9,7 -> 7,9").unwrap();
        assert_eq!(
            points(vent),
            vec![
                Point { x: 9, y: 7 },
                Point { x: 8, y: 8 },
                Point { x: 7, y: 9 },
            ]
        );
    }

    #[test]
    fn part_1_ignores_diagonals() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "5");
    }

    #[test]
    fn part_2_includes_diagonals() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "12");
    }
}
