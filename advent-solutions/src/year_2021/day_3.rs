use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::anyhow;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 3, tags = ["2021", "binary"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    width: usize,
    readings: Vec<Vec<u8>>,
}

impl AdventParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let readings = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .chars()
                    .map(|c| match c {
                        '0' => Ok(0u8),
                        '1' => Ok(1u8),
                        other => Err(anyhow!("(line {}) invalid bit {:?}", line_idx + 1, other)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let width = readings.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::MissingData("no diagnostic readings".into()));
        }
        if let Some(bad) = readings.iter().find(|r| r.len() != width) {
            return Err(ParseError::InvalidFormat(format!(
                "ragged reading width: expected {}, got {}",
                width,
                bad.len()
            )));
        }

        Ok(SharedData { width, readings })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let gamma_bits: Vec<u8> = (0..shared.width)
            .map(|i| {
                let ones = count_ones(&shared.readings, i);
                // Strict majority; the puzzle input never ties per column
                if ones * 2 > shared.readings.len() { 1 } else { 0 }
            })
            .collect();
        let epsilon_bits: Vec<u8> = gamma_bits.iter().map(|b| 1 - b).collect();

        Ok((bits_to_value(&gamma_bits) * bits_to_value(&epsilon_bits)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Ties keep 1 for the oxygen rating and 0 for the CO2 rating
        let oxygen = filter_by_bit_criteria(shared, |ones, total| {
            if ones * 2 >= total { 1 } else { 0 }
        })?;
        let co2 = filter_by_bit_criteria(shared, |ones, total| {
            if ones * 2 < total { 1 } else { 0 }
        })?;

        Ok((bits_to_value(&oxygen) * bits_to_value(&co2)).to_string())
    }
}

fn count_ones(readings: &[Vec<u8>], column: usize) -> usize {
    readings.iter().filter(|r| r[column] == 1).count()
}

fn bits_to_value(bits: &[u8]) -> u64 {
    bits.iter().fold(0, |acc, &b| acc << 1 | u64::from(b))
}

fn filter_by_bit_criteria(
    shared: &SharedData,
    target_bit: impl Fn(usize, usize) -> u8,
) -> Result<Vec<u8>, SolveError> {
    let mut remaining: Vec<&Vec<u8>> = shared.readings.iter().collect();

    for column in 0..shared.width {
        if remaining.len() == 1 {
            break;
        }
        let ones = remaining.iter().filter(|r| r[column] == 1).count();
        let target = target_bit(ones, remaining.len());
        remaining.retain(|r| r[column] == target);
    }

    match remaining.as_slice() {
        [reading] => Ok((*reading).clone()),
        _ => Err(SolveError::SolveFailed(
            anyhow!("bit criteria did not reduce to a single reading").into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010";

    #[test]
    fn part_1_gamma_times_epsilon() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "198");
    }

    #[test]
    fn part_2_life_support_rating() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "230");
    }

    #[test]
    fn rejects_ragged_readings() {
        assert!(Solver::parse("010\n01").is_err());
    }

    #[test]
    fn rejects_non_binary_characters() {
        assert!(Solver::parse("012").is_err());
    }
}
