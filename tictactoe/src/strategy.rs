
use super::board::Board;
use super::coord::Coord;

use utils::*;

///
/// The move-selection strategies an AI seat can be given.
///
/// No real opponent logic exists yet. The only strategy takes the first open
/// cell, so AI seats play deterministically.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy
{
    #[default]
    FirstAvailable
}

impl std::fmt::Display for Strategy
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Strategy::FirstAvailable => write!(f, "first_available")
        }
    }
}

impl Strategy
{
    ///
    /// Picks a cell on the given board, or None when the board is full.
    ///
    pub fn select (& self, board: & Board) -> Option<Coord>
    {
        match self
        {
            Strategy::FirstAvailable => board.available().first().copied()
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::cell::Token;
    use utils::notate::Notate;

    #[test]
    fn test_first_available_scans_in_index_order()
    {
        let board = Board::parse("XO_______").unwrap();
        assert_eq!(Strategy::FirstAvailable.select(& board), Some(Coord::new(0, 2)));
    }

    #[test]
    fn test_full_board_has_no_selection()
    {
        let board = Board::parse("XOXXOOOXO").unwrap();
        assert!(board.is_full());
        assert_eq!(Strategy::default().select(& board), None);
        assert!(! board.is_winner(Token::X));
    }
}
