// Ficheiro: src/config.rs
// Descrição: Configuração do motor (política de decisão, avaliação, busca e paralelismo).

use crate::error::{EngineError, Result};
use crate::search::Strategy;

pub const DEFAULT_DEPTH: u8 = 5;
pub const DEFAULT_SIMULATIONS: u32 = 10;

/// Número padrão de workers: 2x o número de núcleos.
pub fn default_workers() -> usize {
    (num_cpus::get() * 2).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Livro -> captura de canto -> negação de canto -> minimax -> Monte Carlo.
    PriorityChain,
    /// Só avaliação paralela na raiz (+ minimax), Monte Carlo como recurso.
    Search,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub policy: Policy,
    pub strategy: Strategy,
    /// Profundidade do minimax abaixo da raiz. 0 = só a heurística.
    pub depth: u8,
    /// Desliga a etapa minimax; o Monte Carlo passa a decidir.
    pub minimax: bool,
    pub simulations: u32,
    pub workers: usize,
    /// Semente do gerador do Monte Carlo. `None` usa entropia do sistema.
    pub seed: Option<u64>,
    pub use_opening_book: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            policy: Policy::PriorityChain,
            strategy: Strategy::Composite,
            depth: DEFAULT_DEPTH,
            minimax: true,
            simulations: DEFAULT_SIMULATIONS,
            workers: default_workers(),
            seed: None,
            use_opening_book: true,
        }
    }
}

impl EngineConfig {
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_minimax(mut self, enabled: bool) -> Self {
        self.minimax = enabled;
        self
    }

    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.simulations = simulations;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opening_book(mut self, enabled: bool) -> Self {
        self.use_opening_book = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(EngineError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
