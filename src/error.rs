// Erros do motor. Nenhum deles é "recuperável" dentro da busca:
// quem chama decide o que fazer.

use crate::core::{Move, Player};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid move {mv} for {player}")]
    InvalidMove { mv: Move, player: Player },

    #[error("coordinate ({row}, {col}) is outside the 8x8 board")]
    InvalidCoordinate { row: u8, col: u8 },

    #[error("cannot parse move '{0}'")]
    ParseMove(String),

    #[error("cannot parse board: {0}")]
    ParseBoard(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("engine invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
