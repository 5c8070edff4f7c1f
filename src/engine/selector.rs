// Ficheiro: src/engine/selector.rs
// Descrição: Ponto de entrada do motor. Escolhe um lance através da cadeia
// de prioridades: livro -> canto -> negação de canto -> minimax -> Monte Carlo.

use crate::config::{EngineConfig, Policy};
use crate::core::bitboard::CORNER_MASK;
use crate::core::*;
use crate::engine::opening_book::OpeningBook;
use crate::error::{EngineError, Result};
use crate::search::{Evaluator, Minimax, MonteCarlo, ParallelDispatcher, WeightTables};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Etapa da política que produziu o último lance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Book,
    Corner,
    CornerDenial,
    Minimax,
    MonteCarlo,
    Pass,
}

pub struct Engine {
    config: EngineConfig,
    heuristic: Arc<dyn Evaluator>,
    book: Option<OpeningBook>,
    search: Minimax,
    rollout: MonteCarlo,
    dispatcher: ParallelDispatcher,
    rng: StdRng,
    last_decision: Option<Decision>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let tables = Arc::new(WeightTables::standard());
        let book = if config.use_opening_book && config.policy == Policy::PriorityChain {
            Some(OpeningBook::standard()?)
        } else {
            None
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Engine {
            heuristic: config.strategy.build(tables),
            book,
            search: Minimax::new(),
            rollout: MonteCarlo::new(config.simulations),
            dispatcher: ParallelDispatcher::new(config.workers)?,
            rng,
            last_decision: None,
            config,
        })
    }

    /// Substitui o livro de aberturas (só é consultado na política PriorityChain).
    pub fn with_opening_book(mut self, book: OpeningBook) -> Self {
        self.book = Some(book);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    /// Escolhe um lance para `player`.
    ///
    /// Sem lances legais devolve `Ok(None)`: é um passe, não um erro.
    /// Um lance escolhido que não seja legal é uma violação de invariante
    /// e devolve `EngineError::InvariantViolation`.
    pub fn select_move(&mut self, board: &Board, player: Player) -> Result<Option<Move>> {
        match self.decide(board, player)? {
            None => {
                debug!("{} has no legal moves, passing", player);
                self.last_decision = Some(Decision::Pass);
                Ok(None)
            }
            Some((mv, decision)) => {
                if !board.is_legal(player, mv) {
                    return Err(EngineError::InvariantViolation(format!(
                        "{:?} step chose illegal move {} for {}",
                        decision, mv, player
                    )));
                }
                debug!("{} plays {} ({:?})", player, mv, decision);
                self.last_decision = Some(decision);
                Ok(Some(mv))
            }
        }
    }

    fn decide(&mut self, board: &Board, player: Player) -> Result<Option<(Move, Decision)>> {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            return Ok(None);
        }

        if self.config.policy == Policy::PriorityChain {
            if let Some(mv) = self.book_move(board, player) {
                return Ok(Some((mv, Decision::Book)));
            }
            if let Some(&mv) = moves.iter().find(|mv| mv.is_corner()) {
                return Ok(Some((mv, Decision::Corner)));
            }
            if let Some(mv) = corner_denial(board, player) {
                return Ok(Some((mv, Decision::CornerDenial)));
            }
        }

        if self.config.minimax {
            let result = self.search.search_root(
                board,
                player,
                self.config.depth,
                self.heuristic.as_ref(),
                &self.dispatcher,
            )?;
            if let Some(best) = result.best {
                return Ok(Some((best.mv, Decision::Minimax)));
            }
            debug!("root search produced no move, falling back to rollouts");
        }

        let chosen = self
            .rollout
            .select(board, player, self.heuristic.as_ref(), &mut self.rng);
        Ok(chosen.map(|scored| (scored.mv, Decision::MonteCarlo)))
    }

    /// Primeira recomendação do livro que seja legal para `player`.
    fn book_move(&self, board: &Board, player: Player) -> Option<Move> {
        let recommended = self.book.as_ref()?.lookup(&board.fingerprint())?;
        let mv = recommended
            .iter()
            .copied()
            .find(|&mv| board.is_legal(player, mv));
        if mv.is_none() {
            debug!("book entry has no legal move for {}", player);
        }
        mv
    }
}

/// Primeiro lance (ordem row-major) depois do qual o adversário não pode jogar num canto.
pub fn corner_denial(board: &Board, player: Player) -> Option<Move> {
    board
        .successors(player)
        .find(|(_, child)| child.legal_mask(!player) & CORNER_MASK == 0)
        .map(|(mv, _)| mv)
}
