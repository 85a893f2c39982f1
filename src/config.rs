use std::time::Duration;

use crate::{Coords, Result, SnakeError};

pub const GAME_WIDTH: i32 = 100;
pub const GAME_HEIGHT: i32 = 700;
pub const CELL_SIZE: i32 = 25;
pub const INITIAL_BODY_LENGTH: usize = 3;
pub const TICK_INTERVAL_MS: u64 = 75;

pub const WINDOW_TITLE: &str = "Snake Game";
pub const LOG_FILE: &str = "snake.log";

/// Board geometry and pacing. The defaults are the fixed game constants; the
/// struct exists so the engine can be exercised on other boards in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub cell_size: i32,
    pub initial_body_length: usize,
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_width: GAME_WIDTH,
            board_height: GAME_HEIGHT,
            cell_size: CELL_SIZE,
            initial_body_length: INITIAL_BODY_LENGTH,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

impl GameConfig {
    /// Number of cells along the x axis.
    pub fn columns(&self) -> i32 {
        self.board_width / self.cell_size
    }

    /// Number of cells along the y axis.
    pub fn rows(&self) -> i32 {
        self.board_height / self.cell_size
    }

    pub fn contains(&self, pos: Coords) -> bool {
        let (x, y) = pos;
        x >= 0 && x < self.board_width && y >= 0 && y < self.board_height
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            return Err(SnakeError::InvalidConfig("cell size must be positive"));
        }
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err(SnakeError::InvalidConfig("board dimensions must be positive"));
        }
        if self.board_width % self.cell_size != 0 || self.board_height % self.cell_size != 0 {
            return Err(SnakeError::InvalidConfig("board dimensions must be multiples of the cell size"));
        }
        if self.initial_body_length == 0 {
            return Err(SnakeError::InvalidConfig("initial body length must be at least 1"));
        }
        Ok(())
    }
}
