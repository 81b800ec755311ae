//! Exhaustive path exploration over a grid.
//!
//! From a start cell the walker follows every step allowed by a step rule
//! in the four cardinal directions. A cell may appear on many different
//! paths but never twice on the same path. Each time a path arrives at a
//! terminal cell that branch ends and the arrival is recorded, so the same
//! exploration answers both "which terminals are reachable" and "how many
//! distinct paths reach a terminal".
//!
//! The depth of the explicit path stack is bounded by the length of the
//! longest legal path, which for ascending-height rules is the value range.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::error::Result;
use crate::grid::{Direction, Grid, Position};

/// Something that happened while exploring paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent {
    /// A cell was pushed onto the current path
    Enter(Position),
    /// A cell was popped off the current path
    Leave(Position),
    /// The current path reached a terminal cell
    Terminal(Position),
}

/// Receives traversal events, e.g. to render the exploration
pub trait TraversalObserver {
    fn on_event(&mut self, event: &TraversalEvent);
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TraversalObserver for NoopObserver {
    fn on_event(&mut self, _event: &TraversalEvent) {}
}

/// Observer that writes every event to the `trace` log level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl TraversalObserver for LogObserver {
    fn on_event(&mut self, event: &TraversalEvent) {
        log::trace!("{:?}", event);
    }
}

/// Step rule for height maps: the next cell is exactly one higher
pub fn ascending_by_one(current: &u8, next: &u8) -> bool {
    current.checked_add(1) == Some(*next)
}

/// A cell on the current path and the next direction still to try from it
#[derive(Debug, Clone, Copy)]
struct PathFrame {
    position: Position,
    next_direction: u8,
}

impl PathFrame {
    fn new(position: Position) -> Self {
        Self {
            position,
            next_direction: 0,
        }
    }
}

/// Depth-first exploration calling `on_terminal` once per path that ends
/// on a terminal cell.
fn explore<T>(
    grid: &Grid<T>,
    start: Position,
    step: &dyn Fn(&T, &T) -> bool,
    terminal: &dyn Fn(&T) -> bool,
    observer: &mut dyn TraversalObserver,
    on_terminal: &mut dyn FnMut(Position),
) -> Result<()> {
    grid.check_bounds(start)?;

    observer.on_event(&TraversalEvent::Enter(start));
    if grid.get(start).map_or(false, |cell| terminal(cell)) {
        on_terminal(start);
        observer.on_event(&TraversalEvent::Terminal(start));
        observer.on_event(&TraversalEvent::Leave(start));
        return Ok(());
    }

    let mut path: SmallVec<[PathFrame; 16]> = SmallVec::new();
    path.push(PathFrame::new(start));

    while let Some(frame) = path.last_mut() {
        if frame.next_direction as usize == Direction::ALL.len() {
            if let Some(done) = path.pop() {
                observer.on_event(&TraversalEvent::Leave(done.position));
            }
            continue;
        }

        let direction = Direction::ALL[frame.next_direction as usize];
        frame.next_direction += 1;
        let current = frame.position;
        let next = current.step(direction);

        // Leaving the grid just ends this branch
        let (from, to) = match (grid.get(current), grid.get(next)) {
            (Some(from), Some(to)) => (from, to),
            _ => continue,
        };
        if !step(from, to) || path.iter().any(|f| f.position == next) {
            continue;
        }

        observer.on_event(&TraversalEvent::Enter(next));
        if terminal(to) {
            on_terminal(next);
            observer.on_event(&TraversalEvent::Terminal(next));
            observer.on_event(&TraversalEvent::Leave(next));
            continue;
        }
        path.push(PathFrame::new(next));
    }

    Ok(())
}

/// Distinct terminal cells reachable from `start`.
///
/// Fails with `OutOfBounds` if `start` is not on the grid.
pub fn reachable_terminals<T>(
    grid: &Grid<T>,
    start: Position,
    step: impl Fn(&T, &T) -> bool,
    terminal: impl Fn(&T) -> bool,
) -> Result<BTreeSet<Position>> {
    reachable_terminals_observed(grid, start, step, terminal, &mut NoopObserver)
}

/// Like [`reachable_terminals`], reporting each traversal event to `observer`
pub fn reachable_terminals_observed<T>(
    grid: &Grid<T>,
    start: Position,
    step: impl Fn(&T, &T) -> bool,
    terminal: impl Fn(&T) -> bool,
    observer: &mut dyn TraversalObserver,
) -> Result<BTreeSet<Position>> {
    let mut terminals = BTreeSet::new();
    explore(grid, start, &step, &terminal, observer, &mut |position: Position| {
        terminals.insert(position);
    })?;
    Ok(terminals)
}

/// Number of distinct paths from `start` that end on a terminal cell.
///
/// A start cell that is itself terminal counts as one path of length one.
pub fn count_distinct_paths<T>(
    grid: &Grid<T>,
    start: Position,
    step: impl Fn(&T, &T) -> bool,
    terminal: impl Fn(&T) -> bool,
) -> Result<u64> {
    count_distinct_paths_observed(grid, start, step, terminal, &mut NoopObserver)
}

/// Like [`count_distinct_paths`], reporting each traversal event to `observer`
pub fn count_distinct_paths_observed<T>(
    grid: &Grid<T>,
    start: Position,
    step: impl Fn(&T, &T) -> bool,
    terminal: impl Fn(&T) -> bool,
    observer: &mut dyn TraversalObserver,
) -> Result<u64> {
    let mut paths = 0u64;
    explore(grid, start, &step, &terminal, observer, &mut |_: Position| paths += 1)?;
    Ok(paths)
}
