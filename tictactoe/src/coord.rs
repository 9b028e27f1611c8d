
use lazy_static::lazy_static;
use regex::Regex;

use super::error::MoveError;

use utils::*;

///
/// The width and height of the board.
///
pub const SIDE : i32 = 3;

///
/// A (row, column) pair naming a cell, counted from the top left.
///
/// A coordinate is not necessarily on the board; the board itself decides
/// whether a proposed coordinate is playable.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord
{
    row: i32,
    col: i32
}

impl std::fmt::Display for Coord
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord
{
    fn from ((row, col): (i32, i32)) -> Coord
    {
        Coord::new(row, col)
    }
}

impl notate::Notate for Coord
{
    fn notate (& self) -> String
    {
        format!("{},{}", self.row, self.col)
    }

    fn parse (s: & str) -> Result<Coord>
    {
        lazy_static!
        {
            static ref COORD_RE : Regex = Regex::new(
                r"^(?:\(\s*(-?\d+)\s*[,\s]\s*(-?\d+)\s*\)|(-?\d+)\s*[,\s]\s*(-?\d+))$"
            ).unwrap();
        }

        let context = format!("Invalid notation '{}' for coordinate.", s);
        let capture = COORD_RE.captures(s.trim()).ok_or_else(|| MoveError::invalid_input(s)).context(context.clone())?;

        // Groups 1 and 2 hold the parenthesized form, 3 and 4 the bare one.
        let first = match capture.get(1)
        {
            Some(_) => 1,
            None    => 3
        };

        let mut values = [0; 2];
        for (i, value) in values.iter_mut().enumerate()
        {
            let text = capture.get(first + i).map(|m| m.as_str()).unwrap_or_default();
            * value = text.parse::<i32>().map_err(|_| MoveError::invalid_input(s)).context(context.clone())?;
        }

        Ok(Coord::new(values[0], values[1]))
    }
}

impl Coord
{
    ///
    /// Returns the coordinate of the cell at the given flat index, if it is on the board.
    ///
    pub fn from_index (index: usize) -> Option<Coord>
    {
        match index < (SIDE * SIDE) as usize
        {
            true  => Some(Coord::new(index as i32 / SIDE, index as i32 % SIDE)),
            false => None
        }
    }

    ///
    /// Determines whether this coordinate is on the board.
    ///
    pub fn in_bounds (& self) -> bool
    {
        0 <= self.row && self.row < SIDE && 0 <= self.col && self.col < SIDE
    }

    ///
    /// Returns the flat index row*3+col, provided the coordinate is on the board.
    ///
    pub fn index (& self) -> Option<usize>
    {
        match self.in_bounds()
        {
            true  => Some((self.row * SIDE + self.col) as usize),
            false => None
        }
    }

    ///
    /// Returns a new coordinate.
    ///
    pub fn new (row: i32, col: i32) -> Coord
    {
        Coord { row, col }
    }

    ///
    /// Returns the row.
    ///
    pub fn row (& self) -> i32
    {
        self.row
    }

    ///
    /// Returns the column.
    ///
    pub fn col (& self) -> i32
    {
        self.col
    }
}
