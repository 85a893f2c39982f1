use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

/// The direction the next tick will move in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirectionState {
    current: Direction,
}

impl Default for DirectionState {
    fn default() -> Self {
        DirectionState { current: Down }
    }
}

impl DirectionState {
    pub fn new(current: Direction) -> Self {
        DirectionState { current }
    }

    pub fn get(&self) -> Direction {
        self.current
    }

    /// Commits `new_direction` unless it is already the current one. Returns
    /// whether anything changed.
    ///
    /// Reversing into the opposite direction is accepted: only a repeat of
    /// the current direction is a no-op.
    pub fn set(&mut self, new_direction: Direction) -> bool {
        if self.current == new_direction {
            return false;
        }
        self.current = new_direction;
        true
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

pub fn map_key(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
