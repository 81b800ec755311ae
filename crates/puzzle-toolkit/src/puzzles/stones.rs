//! Engraved stones that change every time you blink.
//!
//! Each blink, every stone changes by the first matching rule:
//! a `0` becomes `1`; a number with an even count of digits splits into its
//! left and right halves (leading zeros dropped); anything else is
//! multiplied by 2024. Stone order never affects the count, so the stones
//! are simulated as a collapsed multiset.

use num::{BigUint, One, Zero};
use smallvec::{smallvec, SmallVec};

use crate::collapser::simulate;
use crate::error::Result;

use super::parse_number;

const MULTIPLIER: u32 = 2024;

pub fn parse(input: &str) -> Result<Vec<BigUint>> {
    let mut stones = Vec::new();
    for (index, line) in input.lines().enumerate() {
        for token in line.split_whitespace() {
            stones.push(parse_number(token, index + 1)?);
        }
    }
    Ok(stones)
}

/// The stones a single stone turns into after one blink
pub fn blink(stone: &BigUint) -> SmallVec<[BigUint; 2]> {
    if stone.is_zero() {
        return smallvec![BigUint::one()];
    }

    let digits = stone.to_str_radix(10);
    if digits.len() % 2 == 0 {
        let (left, right) = digits.split_at(digits.len() / 2);
        // Both halves are plain decimal digits
        if let (Ok(left), Ok(right)) = (left.parse::<BigUint>(), right.parse::<BigUint>()) {
            return smallvec![left, right];
        }
    }

    smallvec![stone * MULTIPLIER]
}

/// Number of stones after `blinks` blinks
pub fn count_after(stones: &[BigUint], blinks: usize) -> BigUint {
    simulate(stones.iter().cloned(), blinks, blink)
}
