
use super::cell::{Cell, Token};
use super::coord::Coord;
use super::error::MoveError;

use utils::notate::Notate;
use utils::*;

///
/// The number of cells on the board.
///
pub const CELLS : usize = 9;

///
/// The eight lines that win the game, as masks over the board encoding: the
/// three rows, the three columns, then the two diagonals.
///
/// Cell (0,0) is the most significant of the nine bits and (2,2) the least.
///
pub const WINNING_MASKS : [u16; 8] =
[
    0b111_000_000,
    0b000_111_000,
    0b000_000_111,
    0b100_100_100,
    0b010_010_010,
    0b001_001_001,
    0b100_010_001,
    0b001_010_100
];

///
/// A tic-tac-toe board: nine cells stored flat in row-major order.
///
/// Cells are only ever filled in; a marked cell is never cleared again.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board
{
    cells: [Cell; CELLS]
}

impl Notate for Board
{
    fn notate (& self) -> String
    {
        self.cells.iter().map(|cell| cell.notate()).collect()
    }

    fn parse (s: & str) -> Result<Board>
    {
        let context = format!("Invalid notation '{}' for board.", s);

        let symbols = s.chars().collect::<Vec<char>>();
        if symbols.len() != CELLS
        {
            return Err(error::error!("Expected {} cells, found {}.", CELLS, symbols.len())).context(context.clone());
        }

        let mut board = Board::new();
        for (i, symbol) in symbols.iter().enumerate()
        {
            board.cells[i] = Cell::parse(& symbol.to_string()).context(context.clone())?;
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        writeln!(f, "   |   |   ")?;
        for (i, row) in self.cells.chunks(3).enumerate()
        {
            if i > 0
            {
                writeln!(f, "___|___|___")?;
                writeln!(f, "   |   |   ")?;
            }
            writeln!(f, " {} | {} | {} ", row[0], row[1], row[2])?;
        }
        writeln!(f, "   |   |   ")
    }
}

impl Board
{
    ///
    /// Returns the coordinates of every empty cell, in index order.
    ///
    pub fn available (& self) -> Vec<Coord>
    {
        self.cells.iter().enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .filter_map(|(i, _)| Coord::from_index(i))
            .collect()
    }

    ///
    /// Returns the number of cells in the given state.
    ///
    pub fn count<C: Into<Cell>> (& self, cell: C) -> usize
    {
        let cell = cell.into();
        self.cells.iter().filter(|& & c| c == cell).count()
    }

    ///
    /// Encodes the board as a 9-bit integer where bit i is set exactly when cell
    /// i is in the given state. Cell 0 maps to the most significant bit.
    ///
    /// Passing a token yields that player's marks; passing Cell::Empty yields
    /// the cells still open for play.
    ///
    pub fn encode<C: Into<Cell>> (& self, cell: C) -> u16
    {
        let cell = cell.into();
        self.cells.iter().fold(0, |bits, & c| (bits << 1) | (c == cell) as u16)
    }

    ///
    /// Returns the cell at the given coordinate, if it is on the board.
    ///
    pub fn get (& self, coord: Coord) -> Option<Cell>
    {
        coord.index().map(|i| self.cells[i])
    }

    ///
    /// Returns all cells in index order.
    ///
    pub fn cells (& self) -> & [Cell; CELLS]
    {
        & self.cells
    }

    ///
    /// Determines whether every cell is marked.
    ///
    pub fn is_full (& self) -> bool
    {
        self.encode(Cell::Empty) == 0
    }

    ///
    /// Determines whether no player can complete any line any more.
    ///
    /// A line stays completable for a player while each of its cells is either
    /// theirs or empty. The board is a stalemate once that holds for no line
    /// and no token.
    ///
    pub fn is_stalemate (& self, tokens: & [Token]) -> bool
    {
        let open = self.encode(Cell::Empty);

        ! tokens.iter().any(|& token|
        {
            let reachable = self.encode(token) | open;
            WINNING_MASKS.iter().any(|& mask| reachable & mask == mask)
        })
    }

    ///
    /// Determines whether the token fully occupies at least one winning line.
    ///
    pub fn is_winner (& self, token: Token) -> bool
    {
        let marks = self.encode(token);
        WINNING_MASKS.iter().any(|& mask| marks & mask == mask)
    }

    ///
    /// Returns an empty board.
    ///
    pub fn new () -> Board
    {
        Board { cells: [Cell::Empty; CELLS] }
    }

    ///
    /// Marks the cell at the coordinate with the token, provided the coordinate
    /// is on the board and the cell is empty. The board is untouched otherwise.
    ///
    pub fn place (& mut self, token: Token, coord: Coord) -> std::result::Result<(), MoveError>
    {
        let index = coord.index().ok_or(MoveError::InvalidCoordinate(coord))?;

        match self.cells[index]
        {
            Cell::Empty           => { self.cells[index] = Cell::Occupied(token); Ok(()) },
            Cell::Occupied(owner) => Err(MoveError::OccupiedCell(coord, owner))
        }
    }

    ///
    /// Marks the cell like place(), but only reports whether the move was accepted.
    ///
    pub fn update<C: Into<Coord>> (& mut self, token: Token, coord: C) -> bool
    {
        self.place(token, coord.into()).is_ok()
    }
}
