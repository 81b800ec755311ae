//! Input parsers and answers for the individual puzzles.
//!
//! Every puzzle parses its text once and computes up to two answers from
//! the parsed value. Answers are returned as decimal strings because some
//! of them do not fit in 64 bits.

pub mod calibration;
pub mod guard;
pub mod page_order;
pub mod stones;
pub mod trails;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::SolveConfig;
use crate::error::{Error, Result};
use crate::walker::{LogObserver, NoopObserver, TraversalObserver};

/// The puzzles this crate can solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Puzzle {
    Trails,
    PageOrder,
    Calibration,
    Stones,
    Patrol,
}

impl Puzzle {
    pub const ALL: [Puzzle; 5] = [
        Puzzle::Trails,
        Puzzle::PageOrder,
        Puzzle::Calibration,
        Puzzle::Stones,
        Puzzle::Patrol,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Puzzle::Trails => "trails",
            Puzzle::PageOrder => "page-order",
            Puzzle::Calibration => "calibration",
            Puzzle::Stones => "stones",
            Puzzle::Patrol => "patrol",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Puzzle::Trails => "summits reachable from trailheads / distinct trails",
            Puzzle::PageOrder => "middle pages of ordered / reordered updates",
            Puzzle::Calibration => "equations solvable with + * / with + * ||",
            Puzzle::Stones => "stones after the short / long blink count",
            Puzzle::Patrol => "cells patrolled / obstacles that trap the guard",
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Puzzle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Puzzle::ALL
            .iter()
            .copied()
            .find(|puzzle| puzzle.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Puzzle::ALL.iter().map(|p| p.name()).collect();
                format!("unknown puzzle {:?}, expected one of: {}", s, names.join(", "))
            })
    }
}

/// Which answers to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parts {
    First,
    Second,
    Both,
}

impl Parts {
    fn first(self) -> bool {
        matches!(self, Parts::First | Parts::Both)
    }

    fn second(self) -> bool {
        matches!(self, Parts::Second | Parts::Both)
    }
}

/// Answers of one solve call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub part1: Option<String>,
    pub part2: Option<String>,
    pub time_elapsed_ms: u64,
}

/// Parse a non-negative decimal number, rejecting signs and other noise
pub(crate) fn parse_number<T: FromStr>(token: &str, line: usize) -> Result<T> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(
            line,
            format!("expected a non-negative number, found {:?}", token),
        ));
    }
    token
        .parse()
        .map_err(|_| Error::malformed(line, format!("number {:?} is out of range", token)))
}

/// Parse `input` for `puzzle` and compute the requested answers
pub fn solve(puzzle: Puzzle, input: &str, parts: Parts, config: &SolveConfig) -> Result<Answers> {
    let start_time = Instant::now();
    log::debug!("solving {} ({:?})", puzzle, parts);

    let mut answers = Answers::default();
    match puzzle {
        Puzzle::Trails => {
            let grid = trails::parse(input)?;
            let mut observer: Box<dyn TraversalObserver> = if log::log_enabled!(log::Level::Trace) {
                Box::new(LogObserver)
            } else {
                Box::new(NoopObserver)
            };
            if parts.first() {
                answers.part1 = Some(trails::part1(&grid, config, observer.as_mut())?.to_string());
            }
            if parts.second() {
                answers.part2 = Some(trails::part2(&grid, config, observer.as_mut())?.to_string());
            }
        }
        Puzzle::PageOrder => {
            let queue = page_order::parse(input)?;
            if parts.first() {
                answers.part1 = Some(page_order::part1(&queue).to_string());
            }
            if parts.second() {
                answers.part2 = Some(page_order::part2(&queue)?.to_string());
            }
        }
        Puzzle::Calibration => {
            let equations = calibration::parse(input)?;
            if parts.first() {
                answers.part1 = Some(
                    calibration::total_calibration(&equations, &config.operators_part1).to_string(),
                );
            }
            if parts.second() {
                answers.part2 = Some(
                    calibration::total_calibration(&equations, &config.operators_part2).to_string(),
                );
            }
        }
        Puzzle::Stones => {
            let initial = stones::parse(input)?;
            if parts.first() {
                answers.part1 = Some(stones::count_after(&initial, config.blinks_part1).to_string());
            }
            if parts.second() {
                answers.part2 = Some(stones::count_after(&initial, config.blinks_part2).to_string());
            }
        }
        Puzzle::Patrol => {
            let lab = guard::parse(input)?;
            if parts.first() {
                answers.part1 = Some(guard::part1(&lab, config).to_string());
            }
            if parts.second() {
                answers.part2 = Some(guard::part2(&lab, config).to_string());
            }
        }
    }

    answers.time_elapsed_ms = start_time.elapsed().as_millis() as u64;
    log::debug!("solved {} in {} ms", puzzle, answers.time_elapsed_ms);
    Ok(answers)
}
