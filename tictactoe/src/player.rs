
use super::cell::Token;
use super::strategy::Strategy;

use utils::*;

///
/// A participant in a game of tic-tac-toe.
///
/// A player is fixed once built: a name to address them by, the token they
/// mark the board with, and whether a strategy rather than a person picks
/// their moves.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player
{
    name: String,
    token: Token,
    ai: bool,
    strategy: Option<Strategy>
}

impl std::fmt::Display for Player
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{} ({})", self.name, self.token)
    }
}

impl Player
{
    ///
    /// Returns an AI player driven by the given strategy.
    ///
    pub fn ai<S: Into<String>> (name: S, token: Token, strategy: Strategy) -> Player
    {
        Player { name: name.into(), token, ai: true, strategy: Some(strategy) }
    }

    ///
    /// Returns a human player.
    ///
    pub fn human<S: Into<String>> (name: S, token: Token) -> Player
    {
        Player::new(name, token, false)
    }

    ///
    /// Determines whether this player's moves come from a strategy.
    ///
    pub fn is_ai (& self) -> bool
    {
        self.ai
    }

    ///
    /// Returns the player's name.
    ///
    pub fn name (& self) -> & str
    {
        & self.name
    }

    ///
    /// Returns a player with no strategy attached.
    ///
    pub fn new<S: Into<String>> (name: S, token: Token, ai: bool) -> Player
    {
        Player { name: name.into(), token, ai, strategy: None }
    }

    ///
    /// Returns the strategy slot, which is empty unless one was attached.
    ///
    pub fn strategy (& self) -> Option<Strategy>
    {
        self.strategy
    }

    ///
    /// Returns the player's token.
    ///
    pub fn token (& self) -> Token
    {
        self.token
    }

    ///
    /// Returns a copy of this player with the given strategy attached.
    ///
    pub fn with_strategy (& self, strategy: Strategy) -> Player
    {
        Player { strategy: Some(strategy), .. self.clone() }
    }
}
