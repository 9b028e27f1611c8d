
use super::error::MoveError;

use utils::notate::Notate;
use utils::*;

///
/// The symbol a player marks the board with.
///
/// Any visible character works except the underscore, which is reserved as
/// the notation for an empty cell.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Token(char);

impl std::fmt::Display for Token
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Token
{
    type Error = MoveError;

    fn try_from (c: char) -> std::result::Result<Token, MoveError>
    {
        Token::new(c)
    }
}

impl From<Token> for char
{
    fn from (token: Token) -> char
    {
        token.0
    }
}

impl Notate for Token
{
    fn notate (& self) -> String
    {
        self.0.to_string()
    }

    fn parse (s: & str) -> Result<Token>
    {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next())
        {
            (Some(c), None) => Ok(Token::new(c)?),
            _               => Err(MoveError::invalid_input(s)).context("A token is exactly one character.")
        }
    }
}

impl Token
{
    ///
    /// The conventional first player's token.
    ///
    pub const X : Token = Token('X');

    ///
    /// The conventional second player's token.
    ///
    pub const O : Token = Token('O');

    ///
    /// Returns a token for the given character, provided it is visible and not the empty marker.
    ///
    pub fn new (c: char) -> std::result::Result<Token, MoveError>
    {
        match c
        {
            '_'                         => Err(MoveError::invalid_input("_")),
            c if c.is_whitespace()      => Err(MoveError::invalid_input(c)),
            c if c.is_control()         => Err(MoveError::invalid_input(c.escape_default().to_string())),
            c                           => Ok(Token(c))
        }
    }

    ///
    /// Returns the underlying character.
    ///
    pub fn symbol (& self) -> char
    {
        self.0
    }
}

///
/// The state of a single square on the board.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell
{
    Empty,
    Occupied(Token)
}

impl Default for Cell
{
    fn default () -> Cell
    {
        Cell::Empty
    }
}

impl From<Token> for Cell
{
    fn from (token: Token) -> Cell
    {
        Cell::Occupied(token)
    }
}

impl std::fmt::Display for Cell
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Cell::Empty           => write!(f, " "),
            Cell::Occupied(token) => write!(f, "{}", token)
        }
    }
}

impl Notate for Cell
{
    fn notate (& self) -> String
    {
        match self
        {
            Cell::Empty           => "_".to_string(),
            Cell::Occupied(token) => token.notate()
        }
    }

    fn parse (s: & str) -> Result<Cell>
    {
        match s
        {
            "_" => Ok(Cell::Empty),
            _   => Ok(Cell::Occupied(Token::parse(s).context(format!("Invalid notation '{}' for cell.", s))?))
        }
    }
}

impl Cell
{
    ///
    /// Determines whether nobody has marked this cell yet.
    ///
    pub fn is_empty (& self) -> bool
    {
        * self == Cell::Empty
    }
}
