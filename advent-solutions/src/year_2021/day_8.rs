use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::anyhow;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 8, tags = ["2021", "deduction"])]
pub struct Solver;

/// One segment pattern as a bitmask over wires a-g.
type Segments = u8;

#[derive(Debug, Clone)]
pub struct Entry {
    patterns: Vec<Segments>,
    outputs: Vec<Segments>,
}

impl AdventParser for Solver {
    type SharedData<'a> = Vec<Entry>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_entry(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }
}

fn parse_entry(line: &str) -> Result<Entry, anyhow::Error> {
    let (patterns, outputs) = line
        .trim()
        .split_once(" | ")
        .ok_or_else(|| anyhow!("expected '<patterns> | <outputs>'"))?;

    let patterns = parse_segments_list(patterns)?;
    let outputs = parse_segments_list(outputs)?;
    if patterns.len() != 10 {
        return Err(anyhow!("expected 10 signal patterns, got {}", patterns.len()));
    }
    if outputs.len() != 4 {
        return Err(anyhow!("expected 4 output digits, got {}", outputs.len()));
    }
    Ok(Entry { patterns, outputs })
}

fn parse_segments_list(text: &str) -> Result<Vec<Segments>, anyhow::Error> {
    text.split_whitespace().map(parse_segments).collect()
}

fn parse_segments(word: &str) -> Result<Segments, anyhow::Error> {
    word.chars().try_fold(0u8, |mask, c| match c {
        'a'..='g' => Ok(mask | 1 << (c as u8 - b'a')),
        other => Err(anyhow!("invalid segment wire {:?}", other)),
    })
}

fn contains(outer: Segments, inner: Segments) -> bool {
    outer & inner == inner
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // 1, 7, 4 and 8 use a unique number of segments
        let easy_digits = shared
            .iter()
            .flat_map(|entry| entry.outputs.iter())
            .filter(|output| matches!(output.count_ones(), 2 | 3 | 4 | 7))
            .count();
        Ok(easy_digits.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(decode_entry)
            .sum::<Result<u64, _>>()
            .map(|sum| sum.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

/// Deduce which pattern is which digit, then read the 4-digit output.
///
/// Elimination order relies on containment between known digits:
/// 1/4/7/8 by segment count, then 3 (five segments containing 1),
/// 9 (contains 3), 0 (remaining containing 1), 6 (remaining six-segment),
/// 5 (contained in 6), and 2 is whatever is left.
fn decode_entry(entry: &Entry) -> Result<u64, anyhow::Error> {
    let mut remaining = entry.patterns.clone();
    let mut digits = [0 as Segments; 10];

    let mut take = |pred: &dyn Fn(Segments) -> bool| -> Result<Segments, anyhow::Error> {
        let position = remaining
            .iter()
            .position(|&p| pred(p))
            .ok_or_else(|| anyhow!("no pattern matches deduction step"))?;
        Ok(remaining.swap_remove(position))
    };

    digits[1] = take(&|p| p.count_ones() == 2)?;
    digits[4] = take(&|p| p.count_ones() == 4)?;
    digits[7] = take(&|p| p.count_ones() == 3)?;
    digits[8] = take(&|p| p.count_ones() == 7)?;
    let one = digits[1];
    digits[3] = take(&|p| p.count_ones() == 5 && contains(p, one))?;
    let three = digits[3];
    digits[9] = take(&|p| contains(p, three))?;
    digits[0] = take(&|p| contains(p, one))?;
    digits[6] = take(&|p| p.count_ones() == 6)?;
    let six = digits[6];
    digits[5] = take(&|p| contains(six, p))?;
    digits[2] = take(&|_| true)?;

    entry.outputs.iter().try_fold(0u64, |value, output| {
        let digit = digits
            .iter()
            .position(|&d| d == *output)
            .ok_or_else(|| anyhow!("output pattern matches no digit"))?;
        Ok(value * 10 + digit as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce";

    const SINGLE: &str =
        "edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc";

    #[test]
    fn part_1_counts_unique_segment_digits() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "26");
    }

    #[test]
    fn decodes_a_single_entry() {
        let shared = Solver::parse(SINGLE).unwrap();
        assert_eq!(decode_entry(&shared[0]).unwrap(), 9781);
    }

    #[test]
    fn part_2_sums_decoded_outputs() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "61229");
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(Solver::parse("abc def").is_err());
    }
}
