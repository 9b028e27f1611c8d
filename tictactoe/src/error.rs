
use thiserror::Error;

use super::cell::Token;
use super::coord::Coord;

///
/// The ways in which a proposed move can be refused.
///
/// None of these are fatal: the game reports them to whoever proposed the
/// move and asks again.
///
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError
{
    #[error("Coordinate {0} is off the board; rows and columns run from 0 to 2.")]
    InvalidCoordinate(Coord),

    #[error("Cell {0} is already taken by '{1}'.")]
    OccupiedCell(Coord, Token),

    #[error("Invalid input '{0}'.")]
    InvalidInput(String),

    #[error("The game is already over.")]
    GameOver
}

impl MoveError
{
    ///
    /// Builds an InvalidInput error from anything string-like.
    ///
    pub fn invalid_input<S: Into<String>> (s: S) -> MoveError
    {
        MoveError::InvalidInput(s.into())
    }
}
