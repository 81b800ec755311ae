//! Hiking trails on a topographic map.
//!
//! A trail starts at a cell of the start height and climbs exactly one
//! height per step until it reaches the terminal height.

use crate::config::SolveConfig;
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::walker::{
    ascending_by_one, count_distinct_paths_observed, reachable_terminals_observed,
    TraversalObserver,
};

pub fn parse(input: &str) -> Result<Grid<u8>> {
    Grid::parse_digits(input)
}

fn trailheads<'a>(grid: &'a Grid<u8>, config: &'a SolveConfig) -> impl Iterator<Item = Position> + 'a {
    grid.find_all(move |&height| height == config.trail_start_height)
}

/// Sum over trailheads of the number of distinct summits each can reach
pub fn part1(
    grid: &Grid<u8>,
    config: &SolveConfig,
    observer: &mut dyn TraversalObserver,
) -> Result<u64> {
    let mut total = 0;
    for start in trailheads(grid, config) {
        let summits = reachable_terminals_observed(
            grid,
            start,
            ascending_by_one,
            |&height| height == config.terminal_height,
            &mut *observer,
        )?;
        log::trace!("trailhead ({}, {}) reaches {} summits", start.x, start.y, summits.len());
        total += summits.len() as u64;
    }
    Ok(total)
}

/// Sum over trailheads of the number of distinct complete trails
pub fn part2(
    grid: &Grid<u8>,
    config: &SolveConfig,
    observer: &mut dyn TraversalObserver,
) -> Result<u64> {
    let mut total = 0;
    for start in trailheads(grid, config) {
        total += count_distinct_paths_observed(
            grid,
            start,
            ascending_by_one,
            |&height| height == config.terminal_height,
            &mut *observer,
        )?;
    }
    Ok(total)
}
