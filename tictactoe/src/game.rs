
use super::board::Board;
use super::cell::Token;
use super::coord::Coord;
use super::error::MoveError;
use super::outcome::Outcome;
use super::player::Player;
use super::provider::MoveProvider;
use super::render::Renderer;

use utils::notate::{self, Notate};
use utils::*;

///
/// The index of the first move that can complete a line: each player needs
/// three marks, so nothing is decided before the fifth move.
///
pub const EARLIEST_DECISION : usize = 4;

///
/// A single game of tic-tac-toe between two players.
///
/// The game owns its board and is the only thing that mutates it. Turns
/// alternate strictly by the parity of the move counter: the first player
/// makes every even-indexed move and the second every odd-indexed one.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game
{
    board: Board,
    players: [Player; 2],
    move_count: usize,
    history: Vec<Coord>,
    outcome: Outcome
}

///
/// A serializable summary of a game, suitable for logs.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord
{
    pub players: Vec<Player>,
    pub moves: String,
    pub board: String,
    pub outcome: Outcome
}

impl Game
{
    ///
    /// Applies a move for the player whose turn it is.
    ///
    /// On success the turn passes to the other player and the current outcome
    /// is returned. A refused move leaves the game exactly as it was.
    ///
    pub fn apply (& mut self, coord: Coord) -> std::result::Result<Outcome, MoveError>
    {
        if self.outcome.is_terminal()
        {
            return Err(MoveError::GameOver);
        }

        let index = self.move_count;
        let seat = index % 2;
        let token = self.players[seat].token();

        self.board.place(token, coord)?;
        self.history.push(coord);
        self.move_count += 1;

        log::debug!("Move {}: {} marks {}.", index + 1, self.players[seat], coord);

        if index >= EARLIEST_DECISION
        {
            if self.board.is_winner(token)
            {
                self.outcome = Outcome::Won(self.players[seat].clone());
            }
            else if self.board.is_stalemate(& self.tokens())
            {
                self.outcome = Outcome::Stalemate;
            }
        }

        Ok(self.outcome.clone())
    }

    ///
    /// Returns the board.
    ///
    pub fn board (& self) -> & Board
    {
        & self.board
    }

    ///
    /// Returns the player whose turn it is.
    ///
    pub fn current_player (& self) -> & Player
    {
        & self.players[self.move_count % 2]
    }

    ///
    /// Returns the coordinates played so far, oldest first.
    ///
    pub fn history (& self) -> & [Coord]
    {
        & self.history
    }

    ///
    /// Determines whether the game has been won or stalemated.
    ///
    pub fn is_over (& self) -> bool
    {
        self.outcome.is_terminal()
    }

    ///
    /// Returns the number of moves applied.
    ///
    pub fn move_count (& self) -> usize
    {
        self.move_count
    }

    ///
    /// Returns a fresh game between the given players; the first one moves first.
    ///
    pub fn new (players: [Player; 2]) -> Result<Game>
    {
        if players[0].token() == players[1].token()
        {
            return Err(error::error!("Both players use the token '{}'.", players[0].token()))
                .context("Failed to create a new game.");
        }

        Ok(Game { board: Board::new(), players, move_count: 0, history: Vec::new(), outcome: Outcome::InProgress })
    }

    ///
    /// Returns the moves played so far as "r,c;r,c;...".
    ///
    pub fn notation (& self) -> String
    {
        notate::notate_seq(& self.history, ";")
    }

    ///
    /// Returns the outcome so far.
    ///
    pub fn outcome (& self) -> & Outcome
    {
        & self.outcome
    }

    ///
    /// Drives the game to its end.
    ///
    /// Each turn the provider for the current seat proposes a move; refused
    /// moves are reported back to that same provider, which is then asked
    /// again. The board is rendered at the start and after every applied
    /// move, followed by the closing message.
    ///
    pub fn play (& mut self, mut providers: [& mut dyn MoveProvider; 2], renderer: & mut dyn Renderer) -> Result<Outcome>
    {
        renderer.render(& self.board.to_string())?;

        while ! self.is_over()
        {
            let seat = self.move_count % 2;
            let player = self.players[seat].clone();

            let coord = providers[seat].propose_move(& player, & self.board)
                .context(format!("Failed to get a move from {}.", player))?;

            match self.apply(coord)
            {
                Ok(_)    => renderer.render(& self.board.to_string())?,
                Err(err) =>
                {
                    log::warn!("Refused {} from {}: {}", coord, player, err);
                    providers[seat].reject(& player, & err)?;
                }
            }
        }

        renderer.render(& self.outcome.to_string())?;

        let record = serde_json::to_string(& self.record()).context("Failed to serialize the game record.")?;
        log::info!("{} Record: {}", self.outcome, record);

        Ok(self.outcome.clone())
    }

    ///
    /// Returns the players in seat order.
    ///
    pub fn players (& self) -> & [Player; 2]
    {
        & self.players
    }

    ///
    /// Returns a summary of the game so far.
    ///
    pub fn record (& self) -> GameRecord
    {
        GameRecord
        {
            players: self.players.to_vec(),
            moves: self.notation(),
            board: self.board.notate(),
            outcome: self.outcome.clone()
        }
    }

    ///
    /// Rebuilds a game by applying the moves in the given notation in order.
    ///
    pub fn replay (players: [Player; 2], moves: & str) -> Result<Game>
    {
        let context = format!("Failed to replay moves '{}'.", moves);

        let mut game = Game::new(players).context(context.clone())?;
        for (i, coord) in notate::parse_seq::<Coord>(moves, ";").context(context.clone())?.into_iter().enumerate()
        {
            game.apply(coord).context(format!("Move {} ({}) is illegal.", i + 1, coord)).context(context.clone())?;
        }

        Ok(game)
    }

    ///
    /// Returns both players' tokens in seat order.
    ///
    pub fn tokens (& self) -> [Token; 2]
    {
        [self.players[0].token(), self.players[1].token()]
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::cell::Cell;

    fn players () -> [Player; 2]
    {
        [Player::human("Xavier", Token::X), Player::human("Olive", Token::O)]
    }

    #[test]
    fn test_new_game_rejects_shared_tokens()
    {
        let result = Game::new([Player::human("A", Token::X), Player::human("B", Token::X)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_turns_alternate_by_parity()
    {
        let mut game = Game::new(players()).unwrap();
        assert_eq!(game.current_player().token(), Token::X);

        game.apply(Coord::new(0, 0)).unwrap();
        assert_eq!(game.current_player().token(), Token::O);

        game.apply(Coord::new(1, 1)).unwrap();
        assert_eq!(game.current_player().token(), Token::X);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_refused_move_keeps_the_turn()
    {
        let mut game = Game::new(players()).unwrap();
        game.apply(Coord::new(0, 0)).unwrap();

        assert_eq!(game.apply(Coord::new(0, 0)), Err(MoveError::OccupiedCell(Coord::new(0, 0), Token::X)));
        assert_eq!(game.apply(Coord::new(-1, 0)), Err(MoveError::InvalidCoordinate(Coord::new(-1, 0))));

        assert_eq!(game.move_count(), 1);
        assert_eq!(game.current_player().token(), Token::O);
        assert_eq!(game.board().count(Cell::Empty), 8);
    }

    #[test]
    fn test_moves_after_the_end_are_refused()
    {
        let mut game = Game::replay(players(), "0,0;1,1;0,1;2,2;0,2").unwrap();
        assert!(game.is_over());
        assert_eq!(game.apply(Coord::new(2, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_notation_replays()
    {
        let game = Game::replay(players(), "1,1;0,0;2,2").unwrap();
        assert_eq!(game.notation(), "1,1;0,0;2,2");
        assert_eq!(game.history().len(), 3);

        let err = Game::replay(players(), "1,1;1,1").unwrap_err();
        assert!(format!("{:#}", err).contains("Move 2"));
    }

    #[test]
    fn test_record_serializes()
    {
        let game = Game::replay(players(), "0,0;1,1;0,1;2,2;0,2").unwrap();
        let record = game.record();
        assert_eq!(record.board, "XXX_O___O");
        assert_eq!(record.outcome, Outcome::Won(players()[0].clone()));

        let json = serde_json::to_string(& record).unwrap();
        let back : GameRecord = serde_json::from_str(& json).unwrap();
        assert_eq!(back, record);
    }
}
