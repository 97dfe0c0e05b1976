use thiserror::Error;
use ventuno_core::HandError;
use ventuno_nash::{GameError, SolveError};

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("invalid hand: {0}")]
    InvalidHand(String),
    #[error("solver error: {0}")]
    Solver(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<HandError> for AdvisorError {
    fn from(value: HandError) -> Self {
        Self::InvalidHand(value.to_string())
    }
}

impl From<GameError> for AdvisorError {
    fn from(value: GameError) -> Self {
        Self::Solver(value.to_string())
    }
}

impl From<SolveError> for AdvisorError {
    fn from(value: SolveError) -> Self {
        Self::Solver(value.to_string())
    }
}

impl From<std::io::Error> for AdvisorError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AdvisorError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
