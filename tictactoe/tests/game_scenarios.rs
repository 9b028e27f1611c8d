//! Whole games driven through providers and renderers.

use std::io::Cursor;

use tictactoe::*;
use utils::notate::Notate;

fn seats () -> [Player; 2]
{
    [Player::human("Xavier", Token::X), Player::human("Olive", Token::O)]
}

#[test]
fn test_scripted_top_row_win()
{
    let mut game = Game::new(seats()).unwrap();
    let mut x = ScriptedProvider::parse("0,0;0,1;0,2").unwrap();
    let mut o = ScriptedProvider::parse("1,1;2,2").unwrap();
    let mut transcript = Transcript::new();

    let outcome = game.play([& mut x, & mut o], & mut transcript).unwrap();

    assert_eq!(outcome, Outcome::Won(seats()[0].clone()));
    assert_eq!(game.move_count(), 5);
    assert_eq!(transcript.last(), Some("Xavier (X) wins!"));
    // The empty board, one frame per move, then the message.
    assert_eq!(transcript.frames().len(), 7);
}

#[test]
fn test_scripted_game_ends_in_stalemate_before_the_board_fills()
{
    let mut game = Game::new(seats()).unwrap();
    let mut x = ScriptedProvider::parse("0,0;0,2;2,1;1,2;2,0").unwrap();
    let mut o = ScriptedProvider::parse("1,1;0,1;1,0;2,2").unwrap();
    let mut transcript = Transcript::new();

    let outcome = game.play([& mut x, & mut o], & mut transcript).unwrap();

    assert_eq!(outcome, Outcome::Stalemate);
    assert_eq!(game.move_count(), 8);
    assert_eq!(game.board().notate(), "XOXOOX_XO");
    assert_eq!(x.remaining(), 1);
}

#[test]
fn test_refused_moves_are_reported_and_resolicited()
{
    let mut game = Game::new(seats()).unwrap();
    let mut x = ScriptedProvider::parse("0,0;3,0;0,1;0,2").unwrap();
    let mut o = ScriptedProvider::parse("0,0;1,1;2,2").unwrap();
    let mut transcript = Transcript::new();

    let outcome = game.play([& mut x, & mut o], & mut transcript).unwrap();

    assert_eq!(outcome.winner().map(|p| p.token()), Some(Token::X));
    assert_eq!(x.rejections().to_vec(), vec![MoveError::InvalidCoordinate(Coord::new(3, 0))]);
    assert_eq!(o.rejections().to_vec(), vec![MoveError::OccupiedCell(Coord::new(0, 0), Token::X)]);
    assert_eq!(game.notation(), "0,0;1,1;0,1;2,2;0,2");
}

#[test]
fn test_exhausted_script_stops_the_game_with_an_error()
{
    let mut game = Game::new(seats()).unwrap();
    let mut x = ScriptedProvider::parse("0,0").unwrap();
    let mut o = ScriptedProvider::parse("1,1").unwrap();

    let err = game.play([& mut x, & mut o], & mut Transcript::new()).unwrap_err();
    assert!(format!("{:#}", err).contains("Xavier"));
    assert!(! game.is_over());
}

#[test]
fn test_two_ai_seats_finish_a_game()
{
    let players = [Player::ai("Deep", Token::X, Strategy::FirstAvailable), Player::new("Blue", Token::O, true)];
    let mut game = Game::new(players.clone()).unwrap();
    let mut x = AiProvider::for_player(& players[0]);
    let mut o = AiProvider::for_player(& players[1]);

    let outcome = game.play([& mut x, & mut o], & mut Transcript::new()).unwrap();

    // First-available fills cells in index order, so X takes 0, 2, 4 and 6
    // and completes the anti-diagonal on the seventh move.
    assert_eq!(outcome, Outcome::Won(players[0].clone()));
    assert_eq!(game.notation(), "0,0;0,1;0,2;1,0;1,1;1,2;2,0");
}

#[test]
fn test_human_against_ai_over_text_streams()
{
    let players = [Player::human("Ada", Token::X), Player::ai("Hal", Token::O, Strategy::FirstAvailable)];
    let mut game = Game::new(players.clone()).unwrap();

    let input = Cursor::new(b"1,1\nnonsense\n1,1\n2,0\n2,2\n".to_vec());
    let mut human = HumanProvider::new(input, Vec::new());
    let mut ai = AiProvider::for_player(& players[1]);
    let mut screen = WriterRenderer::new(Vec::new());

    let outcome = game.play([& mut human, & mut ai], & mut screen).unwrap();

    // Ada: 1,1 then 2,0 then 2,2; Hal: 0,0 then 0,1 then 0,2.
    assert_eq!(outcome, Outcome::Won(players[1].clone()));

    let (_, prompts) = human.into_inner();
    let prompts = String::from_utf8(prompts).unwrap();
    assert!(prompts.contains("'nonsense' is not a move."));
    assert!(prompts.contains("already taken"));

    let screen = String::from_utf8(screen.into_inner()).unwrap();
    assert!(screen.ends_with("Hal (O) wins!\n"));
    assert!(screen.contains(" O | O | O "));
}
