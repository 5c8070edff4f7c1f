// Pelanca Reversi - motor de seleção de lances para Othello 8x8
//
// O ponto de entrada é `Engine::select_move`. O ciclo de turnos, a contagem
// final e a renderização ficam do lado de quem chama (ver `src/main.rs`).

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod search;

pub use crate::config::{EngineConfig, Policy};
pub use crate::core::*;
pub use crate::engine::{Decision, Engine, OpeningBook};
pub use crate::error::{EngineError, Result};
pub use crate::search::{Evaluator, ScoredMove, Strategy};
