//! Guard patrol simulation with bounded steps and loop detection.
//!
//! The guard walks forward until the cell ahead is an obstacle, then turns
//! right in place. A patrol ends when the guard steps off the grid, when a
//! (position, direction) state repeats, or when the step cap is reached.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::grid::{Direction, Grid, Position};

/// Cell glyph for an obstacle
pub const OBSTACLE: char = '#';
/// Cell glyph for open floor
pub const FLOOR: char = '.';

/// How a patrol ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolStatus {
    /// Guard walked off the grid
    Exited,
    /// Guard returned to an earlier position facing the same way
    Looped,
    /// Exceeded the step cap
    StepLimit,
}

/// Guard position and heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guard {
    pub position: Position,
    pub direction: Direction,
}

impl Guard {
    /// Locate the first guard glyph in row-major order
    pub fn find(grid: &Grid<char>) -> Result<Guard> {
        grid.positions()
            .find_map(|position| {
                grid.get(position)
                    .and_then(|&glyph| Direction::from_glyph(glyph))
                    .map(|direction| Guard {
                        position,
                        direction,
                    })
            })
            .ok_or_else(|| Error::MalformedGrid {
                reason: "no guard glyph (^ > v <) found".to_string(),
            })
    }
}

/// Counters collected during a patrol
#[derive(Debug, Clone, Default)]
pub struct PatrolMetrics {
    /// Forward moves made
    pub steps: usize,
    /// Right turns made
    pub turns: usize,
}

/// Result of running a patrol
#[derive(Debug, Clone)]
pub struct PatrolResult {
    pub status: PatrolStatus,
    pub metrics: PatrolMetrics,
    /// Distinct cells the guard stood on, including the start
    pub visited: HashSet<Position>,
}

impl PatrolResult {
    pub fn looped(&self) -> bool {
        self.status == PatrolStatus::Looped
    }
}

/// Run a patrol on `grid`, optionally with one extra obstacle placed on it.
pub fn patrol(
    grid: &Grid<char>,
    start: Guard,
    extra_obstacle: Option<Position>,
    max_steps: usize,
) -> PatrolResult {
    let mut guard = start;
    let mut metrics = PatrolMetrics::default();
    let mut visited = HashSet::new();
    let mut seen_states = HashSet::new();

    let blocked = |position: Position| {
        extra_obstacle == Some(position) || grid.get(position) == Some(&OBSTACLE)
    };

    while metrics.steps < max_steps {
        if !seen_states.insert(guard) {
            return PatrolResult {
                status: PatrolStatus::Looped,
                metrics,
                visited,
            };
        }
        visited.insert(guard.position);

        let ahead = guard.position.step(guard.direction);
        if !grid.contains(ahead) {
            return PatrolResult {
                status: PatrolStatus::Exited,
                metrics,
                visited,
            };
        }

        if blocked(ahead) {
            guard.direction = guard.direction.turn_right();
            metrics.turns += 1;
            continue;
        }

        guard.position = ahead;
        metrics.steps += 1;
    }

    log::warn!(
        "patrol from ({}, {}) stopped after {} steps without exiting or looping",
        start.position.x,
        start.position.y,
        max_steps
    );
    PatrolResult {
        status: PatrolStatus::StepLimit,
        metrics,
        visited,
    }
}

/// Open floor cells where a single added obstacle traps the guard in a loop.
///
/// An obstacle can only change the patrol if it sits on the unobstructed
/// route, so only those cells are tried. The start cell is never a
/// candidate.
pub fn loop_obstacles(grid: &Grid<char>, start: Guard, max_steps: usize) -> Vec<Position> {
    let route = patrol(grid, start, None, max_steps);
    let mut candidates: Vec<Position> = route
        .visited
        .into_iter()
        .filter(|&position| position != start.position && grid.get(position) == Some(&FLOOR))
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .filter(|&obstacle| patrol(grid, start, Some(obstacle), max_steps).looped())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAB: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    fn lab() -> (Grid<char>, Guard) {
        let grid = Grid::parse_chars(LAB).unwrap();
        let guard = Guard::find(&grid).unwrap();
        (grid, guard)
    }

    #[test]
    fn test_find_guard() {
        let (_, guard) = lab();
        assert_eq!(guard.position, Position::new(4, 6));
        assert_eq!(guard.direction, Direction::Up);
    }

    #[test]
    fn test_missing_guard_is_an_error() {
        let grid = Grid::parse_chars("..#\n...\n").unwrap();
        assert!(matches!(Guard::find(&grid), Err(Error::MalformedGrid { .. })));
    }

    #[test]
    fn test_patrol_exits() {
        let (grid, guard) = lab();
        let result = patrol(&grid, guard, None, 10_000);
        assert_eq!(result.status, PatrolStatus::Exited);
        assert_eq!(result.visited.len(), 41);
    }

    #[test]
    fn test_added_obstacle_causes_loop() {
        let (grid, guard) = lab();
        let result = patrol(&grid, guard, Some(Position::new(3, 6)), 10_000);
        assert_eq!(result.status, PatrolStatus::Looped);
    }

    #[test]
    fn test_loop_obstacles() {
        let (grid, guard) = lab();
        let obstacles = loop_obstacles(&grid, guard, 10_000);
        assert_eq!(obstacles.len(), 6);
        assert!(obstacles.contains(&Position::new(3, 6)));
        assert!(!obstacles.contains(&guard.position));
    }

    #[test]
    fn test_step_limit() {
        let (grid, guard) = lab();
        let result = patrol(&grid, guard, None, 3);
        assert_eq!(result.status, PatrolStatus::StepLimit);
        assert_eq!(result.metrics.steps, 3);
    }

    #[test]
    fn test_boxed_in_guard_loops_by_turning() {
        let grid = Grid::parse_chars(".#.\n#^#\n.#.\n").unwrap();
        let guard = Guard::find(&grid).unwrap();
        let result = patrol(&grid, guard, None, 100);
        assert_eq!(result.status, PatrolStatus::Looped);
        assert_eq!(result.metrics.steps, 0);
        assert_eq!(result.metrics.turns, 4);
        assert_eq!(result.visited.len(), 1);
    }
}
