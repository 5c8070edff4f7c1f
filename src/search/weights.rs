// Tabelas de pesos posicionais por fase do jogo.
// São dados de configuração imutáveis, injetados no avaliador posicional.

use crate::core::GameStage;

pub type WeightTable = [[i32; 8]; 8];

pub const EARLY_GAME_WEIGHTS: WeightTable = [
    [120, -20, 20, 10, 10, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 10, 3, 3, 10, -5, 20],
    [10, -5, 3, 3, 3, 3, -5, 10],
    [10, -5, 3, 3, 3, 3, -5, 10],
    [20, -5, 10, 3, 3, 10, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 10, 10, 20, -20, 120],
];

pub const MID_GAME_WEIGHTS: WeightTable = [
    [120, -20, 20, 10, 10, 20, -20, 120],
    [-20, -30, -5, -5, -5, -5, -30, -20],
    [20, -5, 10, 3, 3, 10, -5, 20],
    [10, -5, 3, 5, 5, 3, -5, 10],
    [10, -5, 3, 5, 5, 3, -5, 10],
    [20, -5, 10, 3, 3, 10, -5, 20],
    [-20, -30, -5, -5, -5, -5, -30, -20],
    [120, -20, 20, 10, 10, 20, -20, 120],
];

pub const LATE_GAME_WEIGHTS: WeightTable = [
    [120, -20, 20, 10, 10, 20, -20, 120],
    [-20, -20, -5, -5, -5, -5, -20, -20],
    [20, -5, 10, 5, 5, 10, -5, 20],
    [10, -5, 5, 5, 5, 5, -5, 10],
    [10, -5, 5, 5, 5, 5, -5, 10],
    [20, -5, 10, 5, 5, 10, -5, 20],
    [-20, -20, -5, -5, -5, -5, -20, -20],
    [120, -20, 20, 10, 10, 20, -20, 120],
];

/// Uma tabela por fase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTables {
    early: WeightTable,
    mid: WeightTable,
    late: WeightTable,
}

impl WeightTables {
    pub fn new(early: WeightTable, mid: WeightTable, late: WeightTable) -> Self {
        WeightTables { early, mid, late }
    }

    pub fn standard() -> Self {
        Self::new(EARLY_GAME_WEIGHTS, MID_GAME_WEIGHTS, LATE_GAME_WEIGHTS)
    }

    #[inline]
    pub fn get(&self, stage: GameStage) -> &WeightTable {
        match stage {
            GameStage::Early => &self.early,
            GameStage::Mid => &self.mid,
            GameStage::Late => &self.late,
        }
    }

    /// Verdadeiro se as três tabelas respeitam as 8 simetrias do tabuleiro.
    pub fn is_symmetric(&self) -> bool {
        [&self.early, &self.mid, &self.late]
            .iter()
            .all(|table| is_table_symmetric(table))
    }
}

impl Default for WeightTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn is_table_symmetric(table: &WeightTable) -> bool {
    (0..8).all(|r| {
        (0..8).all(|c| {
            let w = table[r][c];
            w == table[c][r] && w == table[7 - r][c] && w == table[r][7 - c]
        })
    })
}
