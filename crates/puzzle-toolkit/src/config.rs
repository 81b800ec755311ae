//! Runtime knobs for the puzzle solvers.

use crate::evaluator::Operator;

/// Configuration shared by all puzzles; each puzzle reads the fields it needs
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Height of the cells trails start from
    pub trail_start_height: u8,
    /// Height at which a trail is complete
    pub terminal_height: u8,
    /// Rounds simulated for the first stones answer
    pub blinks_part1: usize,
    /// Rounds simulated for the second stones answer
    pub blinks_part2: usize,
    /// Forward moves before a patrol is abandoned
    pub max_patrol_steps: usize,
    /// Operators available for the first calibration answer
    pub operators_part1: Vec<Operator>,
    /// Operators available for the second calibration answer
    pub operators_part2: Vec<Operator>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            trail_start_height: 0,
            terminal_height: 9,
            blinks_part1: 25,
            blinks_part2: 75,
            max_patrol_steps: 10_000,
            operators_part1: vec![Operator::Add, Operator::Multiply],
            operators_part2: vec![Operator::Add, Operator::Multiply, Operator::Concatenate],
        }
    }
}
