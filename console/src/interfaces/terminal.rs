
use std::cell::RefCell;
use std::io::{BufRead, Write};

use crate::config::*;

use super::scoreboard::Scoreboard;

use tictactoe::{AiProvider, Game, HumanProvider, MoveProvider, Outcome, Player, Renderer, WriterRenderer};

use utils::*;

///
/// Moves the cursor home and wipes the terminal.
///
const CLEAR_SCREEN : & str = "\x1B[2J\x1B[1;1H";

///
/// Runs games in the terminal until the players decline a rematch.
///
pub struct TerminalInterface
{
    config: Config,
    players: [Player; 2],
    scoreboard: Scoreboard
}

impl TerminalInterface
{
    ///
    /// Creates a new terminal interface.
    ///
    pub fn new (config: & Config) -> Result<TerminalInterface>
    {
        let players = config.build_players().context("Failed to seat the players.")?;
        let scoreboard = Scoreboard::new(& players);

        Ok(TerminalInterface { config: config.clone(), players, scoreboard })
    }

    ///
    /// Plays one game. Human seats read from the input and prompt on the output.
    ///
    fn play_game<R: BufRead, W: Write> (& self, input: R, prompts: W, renderer: & mut dyn Renderer) -> Result<Outcome>
    {
        let mut game = Game::new(self.players.clone())?;
        let keyboard = RefCell::new(HumanProvider::new(input, prompts));

        let mut first = seat(& self.players[0], & keyboard);
        let mut second = seat(& self.players[1], & keyboard);

        game.play([first.as_mut(), second.as_mut()], renderer)
    }

    ///
    /// Returns the running totals for this session.
    ///
    pub fn scoreboard (& self) -> & Scoreboard
    {
        & self.scoreboard
    }

    ///
    /// Runs the replay loop: after each game the players are asked whether to
    /// play again, and anything but "n" starts a new game. The scoreboard is
    /// shown once the session ends.
    ///
    pub fn run_session<R: BufRead, W: Write, V: Write> (& mut self, mut input: R, mut prompts: W, screen: V) -> Result<()>
    {
        let mut renderer = WriterRenderer::new(screen);
        let mut answer = Vec::new();

        loop
        {
            if self.config.clear_screen
            {
                renderer.render(CLEAR_SCREEN)?;
            }

            let outcome = match self.play_game(& mut input, & mut prompts, & mut renderer)
            {
                Ok(outcome) => outcome,
                Err(err)    =>
                {
                    log::error!("Game {} was abandoned: {:#}", self.scoreboard.games() + 1, err);
                    renderer.render(& self.scoreboard.to_string())?;
                    return Err(err);
                }
            };
            self.scoreboard.record(& outcome);
            log::info!("Game {} finished: {}", self.scoreboard.games(), outcome);

            write!(prompts, "Play again? (y/n) ")?;
            prompts.flush()?;

            answer.clear();
            let read = input.read_until(b'\n', & mut answer).context("Failed to read the replay answer.")?;
            if read == 0 || String::from_utf8_lossy(& answer).trim().eq_ignore_ascii_case("n")
            {
                break;
            }
        }

        renderer.render(& self.scoreboard.to_string())?;
        Ok(())
    }
}

///
/// Returns the move provider for a seat: its strategy for an AI player, the
/// shared keyboard otherwise.
///
fn seat<'a, P: MoveProvider + 'a> (player: & Player, keyboard: & 'a RefCell<P>) -> Box<dyn MoveProvider + 'a>
{
    match player.is_ai()
    {
        true  => Box::new(AiProvider::for_player(player)),
        false => Box::new(keyboard)
    }
}
