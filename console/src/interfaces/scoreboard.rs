
use tabled::{Table, Tabled};

use tictactoe::{Outcome, Player};

///
/// One line of the end-of-session table.
///
#[derive(Tabled)]
struct Tally
{
    result: String,
    games: usize
}

///
/// Running totals over every game played in a session.
///
#[derive(Clone, Debug)]
pub struct Scoreboard
{
    players: [Player; 2],
    wins: [usize; 2],
    stalemates: usize
}

impl std::fmt::Display for Scoreboard
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let mut rows = self.players.iter().zip(self.wins)
            .map(|(player, wins)| Tally { result: format!("{} wins", player), games: wins })
            .collect::<Vec<Tally>>();
        rows.push(Tally { result: "Stalemates".to_owned(), games: self.stalemates });

        write!(f, "{}", Table::new(rows))
    }
}

impl Scoreboard
{
    ///
    /// Returns the number of finished games recorded.
    ///
    pub fn games (& self) -> usize
    {
        self.wins.iter().sum::<usize>() + self.stalemates
    }

    ///
    /// Returns an empty scoreboard for the given seats.
    ///
    pub fn new (players: & [Player; 2]) -> Scoreboard
    {
        Scoreboard { players: players.clone(), wins: [0; 2], stalemates: 0 }
    }

    ///
    /// Counts a finished game; games still in progress are ignored.
    ///
    pub fn record (& mut self, outcome: & Outcome)
    {
        match outcome
        {
            Outcome::Won(winner) =>
            {
                if let Some(seat) = self.players.iter().position(|p| p == winner)
                {
                    self.wins[seat] += 1;
                }
            },
            Outcome::Stalemate  => self.stalemates += 1,
            Outcome::InProgress => {}
        }
    }

    ///
    /// Returns the wins recorded for each seat.
    ///
    pub fn wins (& self) -> [usize; 2]
    {
        self.wins
    }

    ///
    /// Returns the number of games that ended in stalemate.
    ///
    pub fn stalemates (& self) -> usize
    {
        self.stalemates
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use tictactoe::Token;

    fn seats () -> [Player; 2]
    {
        [Player::human("Ada", Token::X), Player::human("Bob", Token::O)]
    }

    #[test]
    fn test_record_tallies_each_result()
    {
        let players = seats();
        let mut board = Scoreboard::new(& players);

        board.record(& Outcome::Won(players[1].clone()));
        board.record(& Outcome::Won(players[1].clone()));
        board.record(& Outcome::Stalemate);
        board.record(& Outcome::InProgress);

        assert_eq!(board.wins(), [0, 2]);
        assert_eq!(board.stalemates(), 1);
        assert_eq!(board.games(), 3);
    }

    #[test]
    fn test_table_names_every_row()
    {
        let players = seats();
        let mut board = Scoreboard::new(& players);
        board.record(& Outcome::Won(players[0].clone()));

        let table = board.to_string();
        assert!(table.contains("Ada (X) wins"));
        assert!(table.contains("Bob (O) wins"));
        assert!(table.contains("Stalemates"));
        assert!(table.contains("result"));
    }
}
