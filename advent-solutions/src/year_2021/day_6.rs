use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2021, day = 6, tags = ["2021", "simulation"])]
pub struct Solver;

const TIMER_BUCKETS: usize = 9;

impl AdventParser for Solver {
    type SharedData<'a> = [u64; TIMER_BUCKETS];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut buckets = [0u64; TIMER_BUCKETS];
        for timer in input.trim().split(',') {
            let timer: usize = timer
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("invalid timer {:?}", timer)))?;
            if timer >= TIMER_BUCKETS {
                return Err(ParseError::InvalidFormat(format!(
                    "timer {} out of range 0-{}",
                    timer,
                    TIMER_BUCKETS - 1
                )));
            }
            buckets[timer] += 1;
        }
        Ok(buckets)
    }
}

/// Advance the timer histogram one day: every bucket shifts down, expiring
/// fish respawn at 6 and spawn a new fish at 8.
fn simulate(buckets: [u64; TIMER_BUCKETS], days: u32) -> u64 {
    let mut buckets = buckets;
    for _ in 0..days {
        buckets.rotate_left(1);
        buckets[6] += buckets[8];
    }
    buckets.iter().sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(simulate(*shared, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(simulate(*shared, 256).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3,4,3,1,2";

    #[test]
    fn population_after_a_few_days() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(simulate(shared, 18), 26);
    }

    #[test]
    fn part_1_simulates_80_days() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "5934");
    }

    #[test]
    fn part_2_simulates_256_days() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "26984457539"
        );
    }

    #[test]
    fn rejects_out_of_range_timers() {
        assert!(Solver::parse("3,9").is_err());
    }
}
