
pub mod scoreboard;
pub mod terminal;
