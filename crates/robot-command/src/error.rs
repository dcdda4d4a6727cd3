use robot_core::InvalidFacing;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{0} takes no arguments")]
    TrailingArguments(String),

    #[error("PLACE takes 3 comma-separated arguments (X,Y,F), got {0}")]
    PlaceArity(usize),

    #[error("invalid coordinate {0:?} (expected an integer)")]
    InvalidCoordinate(String),

    #[error(transparent)]
    InvalidFacing(#[from] InvalidFacing),
}

pub type ParseResult<T> = Result<T, ParseError>;
