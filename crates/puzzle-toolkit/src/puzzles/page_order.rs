//! Print queue updates checked against page ordering rules.
//!
//! Input is a block of `before|after` rules, a blank line, then one
//! comma-separated update per line.

use crate::error::{Error, Result};
use crate::topo::{is_consistent, order, Constraint};

use super::parse_number;

/// Ordering rules and the updates to check against them
#[derive(Debug, Clone)]
pub struct PrintQueue {
    pub rules: Vec<Constraint<u32>>,
    pub updates: Vec<Vec<u32>>,
}

pub fn parse(input: &str) -> Result<PrintQueue> {
    let mut rules = Vec::new();
    let mut updates = Vec::new();
    let mut in_rules = true;

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            in_rules = false;
            continue;
        }

        if in_rules {
            let (before, after) = line.split_once('|').ok_or_else(|| {
                Error::malformed(line_number, format!("expected before|after, found {:?}", line))
            })?;
            rules.push(Constraint::new(
                parse_number(before, line_number)?,
                parse_number(after, line_number)?,
            ));
        } else {
            let update = line
                .split(',')
                .map(|page| parse_number(page, line_number))
                .collect::<Result<Vec<u32>>>()?;
            updates.push(update);
        }
    }

    if in_rules {
        return Err(Error::malformed(
            input.lines().count().max(1),
            "missing blank line between rules and updates",
        ));
    }

    Ok(PrintQueue { rules, updates })
}

fn middle_page(update: &[u32]) -> u64 {
    update.get(update.len() / 2).copied().map_or(0, u64::from)
}

/// Sum of middle pages of updates already in a valid order
pub fn part1(queue: &PrintQueue) -> u64 {
    queue
        .updates
        .iter()
        .filter(|update| is_consistent(update.as_slice(), &queue.rules))
        .map(|update| middle_page(update))
        .sum()
}

/// Sum of middle pages of the misordered updates once put in order
pub fn part2(queue: &PrintQueue) -> Result<u64> {
    let mut total = 0;
    for update in &queue.updates {
        if is_consistent(update, &queue.rules) {
            continue;
        }
        let ordered = order(update, &queue.rules)?;
        total += middle_page(&ordered);
    }
    Ok(total)
}
