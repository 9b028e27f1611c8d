
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

use super::board::Board;
use super::coord::Coord;
use super::error::MoveError;
use super::player::Player;
use super::strategy::Strategy;

use utils::notate::{self, Notate};
use utils::*;

///
/// A source of moves for one seat at the table.
///
/// The game asks the provider of the player to move for a coordinate, checks
/// it against the board, and hands any refusal back through reject() before
/// asking again.
///
pub trait MoveProvider
{
    ///
    /// Returns the coordinate the given player wants to mark.
    ///
    fn propose_move (& mut self, player: & Player, board: & Board) -> Result<Coord>;

    ///
    /// Tells the provider its last proposal was refused, and why.
    ///
    fn reject (& mut self, _player: & Player, _error: & MoveError) -> Result<()>
    {
        Ok(())
    }
}

///
/// Lets several seats share one provider, such as two people at one keyboard.
///
impl<P: MoveProvider + ?Sized> MoveProvider for & RefCell<P>
{
    fn propose_move (& mut self, player: & Player, board: & Board) -> Result<Coord>
    {
        self.borrow_mut().propose_move(player, board)
    }

    fn reject (& mut self, player: & Player, error: & MoveError) -> Result<()>
    {
        self.borrow_mut().reject(player, error)
    }
}

///
/// A person typing moves, one per line, as "row,col".
///
/// Lines that are not a pair of integers are answered and re-prompted here;
/// only well-formed coordinates reach the game.
///
pub struct HumanProvider<R: BufRead, W: Write>
{
    input: R,
    output: W
}

impl<R: BufRead, W: Write> HumanProvider<R, W>
{
    ///
    /// Returns a provider that prompts on the writer and reads from the reader.
    ///
    pub fn new (input: R, output: W) -> HumanProvider<R, W>
    {
        HumanProvider { input, output }
    }

    ///
    /// Returns the reader and writer.
    ///
    pub fn into_inner (self) -> (R, W)
    {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> MoveProvider for HumanProvider<R, W>
{
    fn propose_move (& mut self, player: & Player, _board: & Board) -> Result<Coord>
    {
        let mut bytes = Vec::new();
        loop
        {
            write!(self.output, "{}, enter your move as row,col: ", player)?;
            self.output.flush()?;

            bytes.clear();
            let read = self.input.read_until(b'\n', & mut bytes).context("Failed to read a move.")?;
            if read == 0
            {
                return Err(MoveError::invalid_input("end of input")).context(format!("{} has no more input.", player));
            }

            // Undecodable bytes become U+FFFD, which no coordinate matches.
            let line = String::from_utf8_lossy(& bytes);
            match Coord::parse(& line)
            {
                Ok(coord) => return Ok(coord),
                Err(err)  =>
                {
                    log::debug!("{:#}", err);
                    writeln!(self.output, "'{}' is not a move. Type a row and a column from 0 to 2, like 1,2.", line.trim())?;
                }
            }
        }
    }

    fn reject (& mut self, _player: & Player, error: & MoveError) -> Result<()>
    {
        writeln!(self.output, "{} Try again.", error)?;
        Ok(())
    }
}

///
/// Plays a fixed list of moves in order; refusals are recorded, not retried.
///
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider
{
    moves: VecDeque<Coord>,
    rejections: Vec<MoveError>
}

impl ScriptedProvider
{
    ///
    /// Returns a provider for the given moves.
    ///
    pub fn new<I, C> (moves: I) -> ScriptedProvider
        where I: IntoIterator<Item = C>, C: Into<Coord>
    {
        ScriptedProvider { moves: moves.into_iter().map(|c| c.into()).collect(), rejections: Vec::new() }
    }

    ///
    /// Returns a provider for moves written as "r,c;r,c;...".
    ///
    pub fn parse (s: & str) -> Result<ScriptedProvider>
    {
        let moves = notate::parse_seq::<Coord>(s, ";").context(format!("Invalid move script '{}'.", s))?;
        Ok(ScriptedProvider::new(moves))
    }

    ///
    /// Returns the moves not yet proposed.
    ///
    pub fn remaining (& self) -> usize
    {
        self.moves.len()
    }

    ///
    /// Returns every refusal reported so far.
    ///
    pub fn rejections (& self) -> & [MoveError]
    {
        & self.rejections
    }
}

impl MoveProvider for ScriptedProvider
{
    fn propose_move (& mut self, player: & Player, _board: & Board) -> Result<Coord>
    {
        self.moves.pop_front()
            .ok_or_else(|| MoveError::invalid_input("end of script"))
            .context(format!("The script for {} ran out of moves.", player))
    }

    fn reject (& mut self, _player: & Player, error: & MoveError) -> Result<()>
    {
        self.rejections.push(error.clone());
        Ok(())
    }
}

///
/// Lets a strategy pick the moves.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct AiProvider
{
    strategy: Strategy
}

impl AiProvider
{
    ///
    /// Returns a provider for the strategy in the player's slot, or the default one.
    ///
    pub fn for_player (player: & Player) -> AiProvider
    {
        AiProvider::new(player.strategy().unwrap_or_default())
    }

    ///
    /// Returns a provider that always asks the given strategy.
    ///
    pub fn new (strategy: Strategy) -> AiProvider
    {
        AiProvider { strategy }
    }
}

impl MoveProvider for AiProvider
{
    fn propose_move (& mut self, player: & Player, board: & Board) -> Result<Coord>
    {
        let coord = self.strategy.select(board)
            .ok_or_else(|| error::error!("Strategy {} found no open cell on board '{}'.", self.strategy, board.notate()))?;

        log::debug!("{} chose {} with strategy {}.", player, coord, self.strategy);
        Ok(coord)
    }

    fn reject (& mut self, player: & Player, error: & MoveError) -> Result<()>
    {
        log::warn!("Strategy {} for {} proposed a refused move: {}", self.strategy, player, error);
        Ok(())
    }
}
