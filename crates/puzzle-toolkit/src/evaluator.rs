//! Exhaustive search over operator assignments in a left-to-right expression.
//!
//! Operands are combined strictly left to right with no precedence: each
//! operator is applied immediately to the running value and the next
//! operand. Values are arbitrary precision because concatenation grows them
//! past 64 bits quickly.

use std::fmt;
use std::str::FromStr;

use num::{BigUint, Zero};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Binary operator that can fill a slot between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "*")]
    Multiply,
    /// Joins the decimal digits of both sides, `12 || 345 = 12345`
    #[serde(rename = "||")]
    Concatenate,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Multiply => "*",
            Operator::Concatenate => "||",
        }
    }

    pub fn apply(self, left: &BigUint, right: &BigUint) -> BigUint {
        match self {
            Operator::Add => left + right,
            Operator::Multiply => left * right,
            Operator::Concatenate => {
                let digits = right.to_str_radix(10).len() as u32;
                left * BigUint::from(10u32).pow(digits) + right
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "*" => Ok(Operator::Multiply),
            "||" => Ok(Operator::Concatenate),
            other => Err(format!("unknown operator {:?}, expected +, * or ||", other)),
        }
    }
}

/// Evaluate `operands` left to right with one operator per gap.
///
/// Returns `None` when there are no operands or the number of operators is
/// not exactly one less than the number of operands.
pub fn evaluate(operands: &[BigUint], operators: &[Operator]) -> Option<BigUint> {
    let (first, rest) = operands.split_first()?;
    if rest.len() != operators.len() {
        return None;
    }
    Some(
        operators
            .iter()
            .zip(rest)
            .fold(first.clone(), |value, (op, operand)| op.apply(&value, operand)),
    )
}

/// Whether some assignment of `alphabet` operators to the gaps between
/// `operands` evaluates to `target`.
///
/// Assignments are enumerated by counting in base `alphabet.len()`, the
/// first gap being the least significant digit, and the search stops at
/// the first match.
pub fn exists_assignment(target: &BigUint, operands: &[BigUint], alphabet: &[Operator]) -> bool {
    let (first, rest) = match operands.split_first() {
        Some(split) => split,
        None => return false,
    };
    if rest.is_empty() {
        return first == target;
    }
    if alphabet.is_empty() {
        return false;
    }

    // With no zero operand to multiply by, the running value never shrinks,
    // so an assignment can be abandoned once it passes the target.
    let never_shrinks = rest.iter().all(|operand| !operand.is_zero());

    let mut digits: SmallVec<[usize; 16]> = SmallVec::from_elem(0, rest.len());
    loop {
        let mut value = first.clone();
        let mut overshot = false;
        for (&digit, operand) in digits.iter().zip(rest) {
            value = alphabet[digit].apply(&value, operand);
            if never_shrinks && &value > target {
                overshot = true;
                break;
            }
        }
        if !overshot && &value == target {
            return true;
        }

        // Advance to the next assignment
        let mut slot = 0;
        loop {
            if slot == digits.len() {
                return false;
            }
            digits[slot] += 1;
            if digits[slot] < alphabet.len() {
                break;
            }
            digits[slot] = 0;
            slot += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    const ADD_MUL: [Operator; 2] = [Operator::Add, Operator::Multiply];
    const ALL: [Operator; 3] = [Operator::Add, Operator::Multiply, Operator::Concatenate];

    #[test]
    fn test_left_to_right_without_precedence() {
        let operands = big(&[1, 2, 3]);
        let value = evaluate(&operands, &[Operator::Add, Operator::Multiply]).unwrap();
        assert_eq!(value, BigUint::from(9u32));
        assert!(exists_assignment(&BigUint::from(9u32), &operands, &ADD_MUL));
        assert!(!exists_assignment(&BigUint::from(7u32), &operands, &ADD_MUL));
    }

    #[test]
    fn test_concatenation() {
        let operands = big(&[10, 19]);
        assert!(exists_assignment(
            &BigUint::from(1019u32),
            &operands,
            &[Operator::Concatenate]
        ));
        assert_eq!(
            Operator::Concatenate.apply(&BigUint::from(12u32), &BigUint::from(0u32)),
            BigUint::from(120u32)
        );
        assert_eq!(
            Operator::Concatenate.apply(&BigUint::from(0u32), &BigUint::from(7u32)),
            BigUint::from(7u32)
        );
    }

    #[test]
    fn test_known_calibrations() {
        let cases: [(u64, &[u64], bool, bool); 5] = [
            (190, &[10, 19], true, true),
            (3267, &[81, 40, 27], true, true),
            (156, &[15, 6], false, true),
            (7290, &[6, 8, 6, 15], false, true),
            (161011, &[16, 10, 13], false, false),
        ];
        for (target, operands, with_two, with_three) in cases {
            let target = BigUint::from(target);
            let operands = big(operands);
            assert_eq!(exists_assignment(&target, &operands, &ADD_MUL), with_two);
            assert_eq!(exists_assignment(&target, &operands, &ALL), with_three);
        }
    }

    #[test]
    fn test_multiplying_by_zero_is_not_pruned() {
        // 5 + 7 overshoots 3, but 5 * 0 + 3 reaches it
        let operands = big(&[5, 0, 3]);
        assert!(exists_assignment(&BigUint::from(3u32), &operands, &ADD_MUL));
    }

    #[test]
    fn test_single_operand_and_empty_inputs() {
        assert!(exists_assignment(&BigUint::from(4u32), &big(&[4]), &[]));
        assert!(!exists_assignment(&BigUint::from(4u32), &big(&[5]), &ADD_MUL));
        assert!(!exists_assignment(&BigUint::from(0u32), &[], &ADD_MUL));
        assert!(!exists_assignment(&BigUint::from(3u32), &big(&[1, 2]), &[]));
        assert_eq!(evaluate(&big(&[1, 2]), &[]), None);
    }

    #[test]
    fn test_results_beyond_64_bits() {
        let operands = big(&[u64::MAX, u64::MAX]);
        let target: BigUint = format!("{}{}", u64::MAX, u64::MAX).parse().unwrap();
        assert!(exists_assignment(&target, &operands, &ALL));
    }

    #[test]
    fn test_operator_symbols() {
        for op in ALL {
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }
        assert!("-".parse::<Operator>().is_err());
    }
}
