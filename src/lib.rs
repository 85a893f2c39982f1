pub mod app;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;
pub mod timer;

pub use error::{Result, SnakeError};

/// Terminal cell coordinates, as crossterm addresses them.
pub type TermInt = u16;
pub type TermCoords = (TermInt, TermInt);

/// A position on the board in board units. Always a multiple of the cell size
/// while the snake is alive; may leave the board by one cell on the tick that
/// ends the game.
pub type Coords = (i32, i32);
