
pub mod board;
pub mod cell;
pub mod coord;
pub mod error;
pub mod game;
pub mod outcome;
pub mod player;
pub mod provider;
pub mod render;
pub mod strategy;

pub use board::Board;
pub use cell::{Cell, Token};
pub use coord::Coord;
pub use error::MoveError;
pub use game::{Game, GameRecord};
pub use outcome::Outcome;
pub use player::Player;
pub use provider::{AiProvider, HumanProvider, MoveProvider, ScriptedProvider};
pub use render::{Renderer, Transcript, WriterRenderer};
pub use strategy::Strategy;
