use crossterm::style::Color;

use crate::config::GameConfig;
use crate::game::{Game, TickOutcome};
use crate::term::TermManager;
use crate::{Coords, Result, TermCoords, TermInt};

const SNAKE_CELL: &str = "██";
const FOOD_CELL: &str = "()";
const EMPTY_CELL: &str = "  ";

const SNAKE_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;
const GAME_OVER_COLOR: Color = Color::Red;
const GAME_OVER_TEXT: &str = "GAME OVER";

/// Board cells are two terminal columns wide so they look square.
const CELL_WIDTH: TermInt = 2;
/// The score line sits above the board's top border.
const BOARD_TOP: TermInt = 1;

/// Smallest terminal that fits the score line and the framed board.
pub fn required_terminal_size(config: &GameConfig) -> TermCoords {
    let width = config.columns() as TermInt * CELL_WIDTH + 2;
    let height = BOARD_TOP + config.rows() as TermInt + 2;
    (width, height)
}

/// Terminal cell of the left half of a board position, or `None` when the
/// position is off the board.
pub fn to_term(pos: Coords, config: &GameConfig) -> Option<TermCoords> {
    if !config.contains(pos) {
        return None;
    }
    let col = (pos.0 / config.cell_size) as TermInt;
    let row = (pos.1 / config.cell_size) as TermInt;
    Some((1 + col * CELL_WIDTH, BOARD_TOP + 1 + row))
}

pub fn score_label(score: u64) -> String {
    format!("Score:{}", score)
}

/// What to paint on the cell the tail just left. `None` while another
/// segment still covers it (stacked segments share a cell). Food that
/// respawned under the body shows again once the body moves off it.
pub fn vacated_cell(game: &Game, tail: Coords) -> Option<(&'static str, Color)> {
    if game.snake().contains(tail) {
        None
    } else if game.food() == tail {
        Some((FOOD_CELL, FOOD_COLOR))
    } else {
        Some((EMPTY_CELL, Color::Reset))
    }
}

/// Score line and banner left on screen once the game ends.
pub fn game_over_text(game: &Game) -> (String, &'static str) {
    (score_label(game.score()), GAME_OVER_TEXT)
}

pub struct Renderer {
    config: GameConfig,
}

impl Renderer {
    pub fn new(config: GameConfig) -> Self {
        Renderer { config }
    }

    pub fn draw_frame(&self, term: &mut TermManager, game: &Game) -> Result<()> {
        term.clear()?;
        self.draw_score(term, game.score())?;
        let (width, height) = required_terminal_size(&self.config);
        term.draw_borders((0, BOARD_TOP), (width, height - BOARD_TOP))?;

        for &pos in game.snake().body() {
            self.draw_cell(term, pos, SNAKE_CELL, SNAKE_COLOR)?;
        }
        self.draw_cell(term, game.food(), FOOD_CELL, FOOD_COLOR)?;

        term.flush()
    }

    pub fn apply(&self, term: &mut TermManager, game: &Game, outcome: &TickOutcome) -> Result<()> {
        if let TickOutcome::Moved { new_head, old_tail, new_food } = outcome {
            self.draw_cell(term, *new_head, SNAKE_CELL, SNAKE_COLOR)?;

            if let Some(tail) = old_tail {
                if let Some((text, color)) = vacated_cell(game, *tail) {
                    self.draw_cell(term, *tail, text, color)?;
                }
            }

            if let Some(food) = new_food {
                self.draw_score(term, game.score())?;
                self.draw_cell(term, *food, FOOD_CELL, FOOD_COLOR)?;
            }

            term.flush()?;
        }
        Ok(())
    }

    /// Wipes the board but keeps the final score on top.
    pub fn draw_game_over(&self, term: &mut TermManager, game: &Game) -> Result<()> {
        let (score, banner) = game_over_text(game);
        term.clear()?;
        self.draw_label(term, &score)?;
        term.show_message(&[banner], GAME_OVER_COLOR)
    }

    fn draw_score(&self, term: &mut TermManager, score: u64) -> Result<()> {
        self.draw_label(term, &score_label(score))
    }

    fn draw_label(&self, term: &mut TermManager, text: &str) -> Result<()> {
        let (width, _) = required_terminal_size(&self.config);
        let label = format!("{:<width$}", text, width = width as usize);
        term.print_at((0, 0), &label, Color::White)
    }

    fn draw_cell(&self, term: &mut TermManager, pos: Coords, text: &str, color: Color) -> Result<()> {
        match to_term(pos, &self.config) {
            Some(at) => term.print_at(at, text, color),
            None => Ok(()),
        }
    }
}
