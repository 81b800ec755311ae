//! Grid representation shared by the traversal and simulation code.
//!
//! A grid is parsed once from puzzle text and is read-only afterwards.
//! Positions use `x` for the column and `y` for the row, with `(0, 0)` in
//! the top-left corner. Coordinates are signed so that a neighbour of an
//! edge cell can be formed and then rejected by a bounds check.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cardinal direction of a single step on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four directions in clockwise order starting from `Up`
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a guard glyph (`^`, `>`, `v`, `<`)
    pub fn from_glyph(glyph: char) -> Option<Direction> {
        match glyph {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }
}

/// Position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one step in `direction`
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Immutable rectangular grid of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Build a grid from rows tagged with their 1-based input line,
    /// rejecting ragged input.
    fn from_rows(rows: Vec<(usize, Vec<T>)>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |(_, row)| row.len());
        if width == 0 {
            return Err(Error::MalformedGrid {
                reason: "grid has no cells".to_string(),
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (line_number, row) in rows {
            if row.len() != width {
                return Err(Error::malformed(
                    line_number,
                    format!("row has {} cells, expected {}", row.len(), width),
                ));
            }
            cells.extend(row);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    /// Get the cell at a position (bounds-checked)
    pub fn get(&self, position: Position) -> Option<&T> {
        if !self.contains(position) {
            return None;
        }
        self.cells
            .get(position.y as usize * self.width + position.x as usize)
    }

    /// Fail with `OutOfBounds` unless the position lies on the grid
    pub fn check_bounds(&self, position: Position) -> Result<()> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Position::new(x as i32, y as i32)))
    }

    /// Positions whose cell satisfies `predicate`, in row-major order
    pub fn find_all<'a>(
        &'a self,
        mut predicate: impl FnMut(&T) -> bool + 'a,
    ) -> impl Iterator<Item = Position> + 'a {
        self.positions()
            .filter(move |&position| self.get(position).map_or(false, |cell| predicate(cell)))
    }
}

/// Non-blank lines of a grid with their 1-based line numbers.
///
/// Blank lines before the first row and after the last one are ignored; a
/// blank line between two rows is an error.
fn grid_lines(text: &str) -> Result<Vec<(usize, &str)>> {
    let mut lines = Vec::new();
    let mut gap = None;
    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            if !lines.is_empty() && gap.is_none() {
                gap = Some(index + 1);
            }
            continue;
        }
        if let Some(blank) = gap {
            return Err(Error::malformed(blank, "blank line inside grid"));
        }
        lines.push((index + 1, line));
    }
    Ok(lines)
}

impl Grid<u8> {
    /// Parse a grid of decimal digits, one row per line
    pub fn parse_digits(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_number, line) in grid_lines(text)? {
            let row = line
                .chars()
                .map(|ch| {
                    ch.to_digit(10).map(|digit| digit as u8).ok_or_else(|| {
                        Error::malformed(line_number, format!("expected a digit, found {:?}", ch))
                    })
                })
                .collect::<Result<Vec<u8>>>()?;
            rows.push((line_number, row));
        }
        Self::from_rows(rows)
    }
}

impl Grid<char> {
    /// Parse a grid of single characters, one row per line
    pub fn parse_chars(text: &str) -> Result<Self> {
        let rows = grid_lines(text)?
            .into_iter()
            .map(|(line_number, line)| (line_number, line.chars().collect()))
            .collect();
        Self::from_rows(rows)
    }
}
