use robot_core::Position;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("robot has not been placed on the grid")]
    NotPlaced,

    #[error("position {0} is off the grid")]
    OutOfBounds(Position),
}

pub type AgentResult<T> = Result<T, AgentError>;
