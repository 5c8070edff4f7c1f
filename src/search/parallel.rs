// Distribuição dos lances candidatos da raiz por um pool de workers.
//
// Só a raiz é paralelizada: cada worker recebe a sua própria cópia do
// tabuleiro (já com o lance candidato aplicado) e a recursão abaixo dela
// é sequencial. O pool é criado uma vez e reutilizado em todas as buscas.

use crate::core::*;
use crate::error::{EngineError, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Par (lance, pontuação) calculado na raiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

impl ScoredMove {
    pub fn new(mv: Move, score: i32) -> Self {
        ScoredMove { mv, score }
    }
}

pub struct ParallelDispatcher {
    pool: Option<ThreadPool>,
    workers: usize,
}

impl ParallelDispatcher {
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(EngineError::InvalidConfig(
                "dispatcher needs at least one worker".to_string(),
            ));
        }

        // Caso especial: 1 worker avalia na própria thread
        let pool = if workers > 1 {
            Some(
                ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("reversi-worker-{}", i))
                    .build()?,
            )
        } else {
            None
        };

        Ok(ParallelDispatcher { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Aplica cada candidato a uma cópia de `board` e pontua o resultado com `score`.
    /// O vetor devolvido segue a ordem de `moves`.
    pub fn evaluate<F>(
        &self,
        board: &Board,
        player: Player,
        moves: &[Move],
        score: F,
    ) -> Result<Vec<ScoredMove>>
    where
        F: Fn(&Board) -> i32 + Sync,
    {
        let evaluate_one = |&mv: &Move| -> Result<ScoredMove> {
            let child = board.apply_move(player, mv)?;
            Ok(ScoredMove::new(mv, score(&child)))
        };

        match &self.pool {
            Some(pool) => pool.install(|| moves.par_iter().map(evaluate_one).collect()),
            None => moves.iter().map(evaluate_one).collect(),
        }
    }
}

/// Melhor par; em caso de empate vence o primeiro na ordem de enumeração.
pub fn best(scored: &[ScoredMove]) -> Option<ScoredMove> {
    scored.iter().copied().fold(None, |best, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })
}
