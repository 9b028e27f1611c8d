
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

use tictactoe::{Player, Strategy, Token};

use utils::error::ensure;
use utils::*;

///
/// Represents a full configuration.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config
{
    #[serde(default = "log_path")]
    pub log_path: String,

    #[serde(default = "log_level")]
    pub log_level: String,

    #[serde(default = "clear_screen")]
    pub clear_screen: bool,

    #[serde(default = "players")]
    pub players: [PlayerConfig; 2]
}

///
/// Represents one seat at the table.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerConfig
{
    pub name: String,

    pub token: char,

    #[serde(default)]
    pub ai: bool,

    #[serde(default)]
    pub strategy: Option<Strategy>
}

impl Default for Config
{
    fn default () -> Config
    {
        Config
        {
            log_path: log_path(),
            log_level: log_level(),
            clear_screen: clear_screen(),
            players: players()
        }
    }
}

impl Config
{
    ///
    /// Reads the configuration at the given path, or the defaults if there is no file there.
    ///
    pub fn load (path: & str) -> Result<Config>
    {
        if ! Path::new(path).exists()
        {
            return Ok(Config::default());
        }

        let context = format!("Failed to load config '{}'.", path);

        let mut config_str = String::new();
        OpenOptions::new().read(true).open(path).context(context.clone())?
            .read_to_string(& mut config_str).context(context.clone())?;

        let config : Config = toml::from_str(& config_str).context(context.clone())?;
        config.build_players().context(context.clone())?;

        Ok(config)
    }

    ///
    /// Builds both players, checking that they can share a board.
    ///
    pub fn build_players (& self) -> Result<[Player; 2]>
    {
        let first = self.players[0].build().context("Invalid first player.")?;
        let second = self.players[1].build().context("Invalid second player.")?;

        ensure!(first.token() != second.token(), "Both players use the token '{}'.", first.token());

        Ok([first, second])
    }
}

impl PlayerConfig
{
    ///
    /// Builds the player this seat describes.
    ///
    pub fn build (& self) -> Result<Player>
    {
        ensure!(! self.name.trim().is_empty(), "A player needs a name.");

        let token = Token::new(self.token).context(format!("'{}' cannot be used as a token.", self.token))?;
        let player = Player::new(self.name.trim(), token, self.ai || self.strategy.is_some());

        Ok(match self.strategy
        {
            Some(strategy) => player.with_strategy(strategy),
            None           => player
        })
    }
}

///
/// Returns the default log path.
///
fn log_path () -> String
{
    "logs".to_owned()
}

fn log_level () -> String
{
    "info".to_owned()
}

fn clear_screen () -> bool
{
    true
}

fn players () -> [PlayerConfig; 2]
{
    [
        PlayerConfig { name: "Player 1".to_owned(), token: 'X', ai: false, strategy: None },
        PlayerConfig { name: "Player 2".to_owned(), token: 'O', ai: false, strategy: None }
    ]
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::io::Write;

    fn write_config (text: & str) -> tempfile::NamedTempFile
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = Config::load(path.to_str().unwrap()).unwrap();

        assert_eq!(config.log_path, "logs");
        assert!(config.clear_screen);
        let [x, o] = config.build_players().unwrap();
        assert_eq!((x.token(), o.token()), (Token::X, Token::O));
    }

    #[test]
    fn test_partial_file_fills_in_defaults()
    {
        let file = write_config("log_level = \"debug\"\nclear_screen = false\n");
        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_path, "logs");
        assert!(! config.clear_screen);
        assert_eq!(config.players[1].name, "Player 2");
    }

    #[test]
    fn test_players_are_read_in_seat_order()
    {
        let file = write_config(concat!(
            "[[players]]\nname = \"Ada\"\ntoken = \"#\"\n",
            "[[players]]\nname = \"Hal\"\ntoken = \"@\"\nstrategy = \"first_available\"\n"
        ));
        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        let [ada, hal] = config.build_players().unwrap();

        assert_eq!(ada.name(), "Ada");
        assert!(! ada.is_ai());
        assert_eq!(hal.token().symbol(), '@');
        assert!(hal.is_ai());
        assert_eq!(hal.strategy(), Some(Strategy::FirstAvailable));
    }

    #[test]
    fn test_shared_tokens_are_rejected()
    {
        let file = write_config(concat!(
            "[[players]]\nname = \"A\"\ntoken = \"X\"\n",
            "[[players]]\nname = \"B\"\ntoken = \"X\"\n"
        ));
        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_reserved_token_is_rejected()
    {
        let file = write_config(concat!(
            "[[players]]\nname = \"A\"\ntoken = \"_\"\n",
            "[[players]]\nname = \"B\"\ntoken = \"O\"\n"
        ));
        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("first player"));
    }
}
