//! Lab guard patrol: cells covered and obstacles that trap the guard.

use crate::config::SolveConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::patrol::{loop_obstacles, patrol, Guard, PatrolStatus};

/// The lab map and the guard's starting state
#[derive(Debug, Clone)]
pub struct Lab {
    pub grid: Grid<char>,
    pub guard: Guard,
}

pub fn parse(input: &str) -> Result<Lab> {
    let grid = Grid::parse_chars(input)?;
    let guard = Guard::find(&grid)?;
    Ok(Lab { grid, guard })
}

/// Distinct cells the guard stands on before leaving the map
pub fn part1(lab: &Lab, config: &SolveConfig) -> u64 {
    let result = patrol(&lab.grid, lab.guard, None, config.max_patrol_steps);
    if result.status != PatrolStatus::Exited {
        log::warn!("guard did not leave the map ({:?})", result.status);
    }
    result.visited.len() as u64
}

/// Open cells where one new obstacle makes the guard loop forever
pub fn part2(lab: &Lab, config: &SolveConfig) -> u64 {
    loop_obstacles(&lab.grid, lab.guard, config.max_patrol_steps).len() as u64
}
