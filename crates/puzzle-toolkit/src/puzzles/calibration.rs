//! Calibration equations with missing operators.
//!
//! Each line is `target: a b c ...`; an equation counts when some choice of
//! operators between the operands reaches the target.

use num::BigUint;

use crate::error::{Error, Result};
use crate::evaluator::{exists_assignment, Operator};

use super::parse_number;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub target: BigUint,
    pub operands: Vec<BigUint>,
}

pub fn parse(input: &str) -> Result<Vec<Equation>> {
    let mut equations = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (target, operands) = line.split_once(':').ok_or_else(|| {
            Error::malformed(line_number, format!("expected target: operands, found {:?}", line))
        })?;
        let operands = operands
            .split_whitespace()
            .map(|operand| parse_number(operand, line_number))
            .collect::<Result<Vec<BigUint>>>()?;
        if operands.is_empty() {
            return Err(Error::malformed(line_number, "equation has no operands"));
        }

        equations.push(Equation {
            target: parse_number(target, line_number)?,
            operands,
        });
    }
    Ok(equations)
}

/// Sum of the targets reachable with the given operators
pub fn total_calibration(equations: &[Equation], alphabet: &[Operator]) -> BigUint {
    equations
        .iter()
        .filter(|equation| exists_assignment(&equation.target, &equation.operands, alphabet))
        .map(|equation| &equation.target)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolveConfig;

    const EQUATIONS: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn test_example_equations() {
        let equations = parse(EQUATIONS).unwrap();
        let config = SolveConfig::default();
        assert_eq!(equations.len(), 9);
        assert_eq!(
            total_calibration(&equations, &config.operators_part1),
            BigUint::from(3749u32)
        );
        assert_eq!(
            total_calibration(&equations, &config.operators_part2),
            BigUint::from(11387u32)
        );
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            parse("190 10 19\n"),
            Err(Error::MalformedInput { line: 1, .. })
        ));
        assert!(matches!(
            parse("190: 10 nineteen\n"),
            Err(Error::MalformedInput { line: 1, .. })
        ));
        assert!(matches!(
            parse("1: 1\n190:\n"),
            Err(Error::MalformedInput { line: 2, .. })
        ));
    }
}
