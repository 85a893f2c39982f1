use crate::TermCoords;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("terminal is {}x{} but the board needs at least {}x{}", actual.0, actual.1, required.0, required.1)]
    TerminalTooSmall { required: TermCoords, actual: TermCoords },
}
