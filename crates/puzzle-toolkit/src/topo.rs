//! Ordering items under pairwise "before/after" constraints.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// `before` must come earlier than `after` whenever both are present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint<T> {
    pub before: T,
    pub after: T,
}

impl<T> Constraint<T> {
    pub fn new(before: T, after: T) -> Self {
        Self { before, after }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Order `items` so that every applicable constraint is satisfied.
///
/// Constraints that mention an item outside `items` are ignored. Items are
/// visited in input order and each one is emitted right after its
/// prerequisites, so an input that is already consistent comes back
/// unchanged. A cycle among the applicable constraints is an error, as is
/// an item listed twice.
pub fn order<T>(items: &[T], constraints: &[Constraint<T>]) -> Result<Vec<T>>
where
    T: Copy + Eq + Hash + Debug,
{
    let mut index_of: HashMap<T, usize> = HashMap::with_capacity(items.len());
    for (index, &item) in items.iter().enumerate() {
        if index_of.insert(item, index).is_some() {
            return Err(Error::DuplicateItem {
                item: format!("{:?}", item),
            });
        }
    }

    // prerequisites[i] holds the indices that must precede items[i]
    let mut prerequisites: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); items.len()];
    for constraint in constraints {
        if let (Some(&before), Some(&after)) =
            (index_of.get(&constraint.before), index_of.get(&constraint.after))
        {
            prerequisites[after].push(before);
        }
    }

    let mut marks = vec![Mark::Unvisited; items.len()];
    let mut ordered = Vec::with_capacity(items.len());
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..items.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            match prerequisites[node].get(next) {
                Some(&prerequisite) => {
                    top.1 += 1;
                    match marks[prerequisite] {
                        Mark::Done => {}
                        Mark::InProgress => {
                            return Err(Error::Cycle {
                                item: format!("{:?}", items[prerequisite]),
                            });
                        }
                        Mark::Unvisited => {
                            marks[prerequisite] = Mark::InProgress;
                            stack.push((prerequisite, 0));
                        }
                    }
                }
                None => {
                    stack.pop();
                    marks[node] = Mark::Done;
                    ordered.push(items[node]);
                }
            }
        }
    }

    Ok(ordered)
}

/// Whether `sequence` already respects every constraint.
///
/// The sequence is inconsistent as soon as some item appears before an item
/// that a constraint says must precede it.
pub fn is_consistent<T>(sequence: &[T], constraints: &[Constraint<T>]) -> bool
where
    T: Copy + Eq + Hash,
{
    let pairs: HashSet<(T, T)> = constraints
        .iter()
        .map(|constraint| (constraint.before, constraint.after))
        .collect();

    for (i, &earlier) in sequence.iter().enumerate() {
        for &later in &sequence[i + 1..] {
            if pairs.contains(&(later, earlier)) {
                return false;
            }
        }
    }
    true
}
