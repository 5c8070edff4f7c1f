use crate::core::bitboard::{popcount, BitboardIterator, CORNER_MASK, CORNER_NEIGHBOUR_MASK};
use crate::core::*;
use crate::search::weights::WeightTables;
use std::sync::Arc;

const MOBILITY_WEIGHT: i32 = 30;
const CORNER_VALUE: i32 = 100;
const CORNER_NEIGHBOUR_PENALTY: i32 = 50;

/// Estratégia de avaliação heurística. Todas as implementações são puras
/// e sem estado mutável, podendo ser partilhadas entre workers.
pub trait Evaluator: Send + Sync {
    fn score(&self, board: &Board, player: Player, stage: GameStage) -> i32;
}

/// Soma dos pesos da tabela da fase: + para casas próprias, - para o adversário.
#[derive(Debug, Clone)]
pub struct Positional {
    tables: Arc<WeightTables>,
}

impl Positional {
    pub fn new(tables: Arc<WeightTables>) -> Self {
        Positional { tables }
    }
}

impl Evaluator for Positional {
    fn score(&self, board: &Board, player: Player, stage: GameStage) -> i32 {
        let table = self.tables.get(stage);
        let weight = |index: u32| table[(index / 8) as usize][(index % 8) as usize];

        let own: i32 = BitboardIterator::new(board.discs(player)).map(weight).sum();
        let opp: i32 = BitboardIterator::new(board.discs(!player)).map(weight).sum();
        own - opp
    }
}

/// Diferença de mobilidade
#[derive(Debug, Clone, Copy, Default)]
pub struct Mobility;

impl Evaluator for Mobility {
    fn score(&self, board: &Board, player: Player, _stage: GameStage) -> i32 {
        let own = popcount(board.legal_mask(player)) as i32;
        let opp = popcount(board.legal_mask(!player)) as i32;
        MOBILITY_WEIGHT * (own - opp)
    }
}

/// Controlo dos cantos: +100 por canto próprio, -100 por canto do adversário.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stability;

impl Evaluator for Stability {
    fn score(&self, board: &Board, player: Player, _stage: GameStage) -> i32 {
        let own = popcount(board.discs(player) & CORNER_MASK) as i32;
        let opp = popcount(board.discs(!player) & CORNER_MASK) as i32;
        CORNER_VALUE * (own - opp)
    }
}

/// Estratégia alternativa: só olha para as casas próprias.
/// +100 por canto, -50 por casa vizinha de canto, +1 pelas restantes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerAdjacency;

impl Evaluator for CornerAdjacency {
    fn score(&self, board: &Board, player: Player, _stage: GameStage) -> i32 {
        let own = board.discs(player);
        let corners = popcount(own & CORNER_MASK) as i32;
        let neighbours = popcount(own & CORNER_NEIGHBOUR_MASK) as i32;
        let others = popcount(own & !(CORNER_MASK | CORNER_NEIGHBOUR_MASK)) as i32;
        CORNER_VALUE * corners - CORNER_NEIGHBOUR_PENALTY * neighbours + others
    }
}

/// Diferença de discos. Avaliador das folhas do minimax, independente da fase.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscDifferential;

impl Evaluator for DiscDifferential {
    fn score(&self, board: &Board, player: Player, _stage: GameStage) -> i32 {
        board.count(player) as i32 - board.count(!player) as i32
    }
}

/// Soma de vários avaliadores.
#[derive(Clone, Default)]
pub struct Composite {
    parts: Vec<Arc<dyn Evaluator>>,
}

impl Composite {
    pub fn new(parts: Vec<Arc<dyn Evaluator>>) -> Self {
        Composite { parts }
    }

    /// Positional + Mobility + Stability
    pub fn standard(tables: Arc<WeightTables>) -> Self {
        Composite::new(vec![
            Arc::new(Positional::new(tables)),
            Arc::new(Mobility),
            Arc::new(Stability),
        ])
    }
}

impl Evaluator for Composite {
    fn score(&self, board: &Board, player: Player, stage: GameStage) -> i32 {
        self.parts
            .iter()
            .map(|part| part.score(board, player, stage))
            .sum()
    }
}

/// Qual heurística o motor usa na raiz e nos playouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Composite,
    CornerAdjacency,
}

impl Strategy {
    pub fn build(self, tables: Arc<WeightTables>) -> Arc<dyn Evaluator> {
        match self {
            Strategy::Composite => Arc::new(Composite::standard(tables)),
            Strategy::CornerAdjacency => Arc::new(CornerAdjacency),
        }
    }
}
