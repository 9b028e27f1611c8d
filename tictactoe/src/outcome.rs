
use super::player::Player;

use utils::*;

///
/// An enum that represents the outcome of a game.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome
{
    InProgress,
    Won(Player),
    Stalemate
}

impl std::fmt::Display for Outcome
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Outcome::InProgress     => write!(f, "The game is in progress."),
            Outcome::Won(player)    => write!(f, "{} wins!", player),
            Outcome::Stalemate      => write!(f, "Stalemate! Nobody can complete a line.")
        }
    }
}

impl Outcome
{
    ///
    /// Determines whether the game has ended.
    ///
    pub fn is_terminal (& self) -> bool
    {
        * self != Outcome::InProgress
    }

    ///
    /// Returns the winner, if there is one.
    ///
    pub fn winner (& self) -> Option<& Player>
    {
        match self
        {
            Outcome::Won(player) => Some(player),
            _                    => None
        }
    }
}
