// Livro de aberturas: impressão digital exata do tabuleiro -> lances recomendados.
// Só existe correspondência exata; uma posição ausente não é erro.

use crate::core::*;
use crate::error::Result;
use std::collections::HashMap;

// Linhas jogadas a partir da posição inicial, pretas primeiro.
const STANDARD_LINES: &[&str] = &[
    // f5 + respostas perpendicular, paralela e diagonal
    "f5 d6 c3 d3 c4 f4 f6",
    "f5 d6 c5 f4 e3",
    "f5 f6 e6 f4 e3",
    "f5 f4 e3 f6 d3 c5",
    // as outras três primeiras jogadas simétricas
    "d3 c5",
    "d3 c3",
    "d3 e3",
    "c4 e3",
    "c4 c3",
    "c4 c5",
    "e6 f4",
    "e6 f6",
    "e6 d6",
];

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<Fingerprint, Vec<Move>>,
}

impl OpeningBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Result<Self> {
        Self::from_lines(STANDARD_LINES)
    }

    /// Constrói o livro a partir de sequências de lances em notação algébrica.
    /// Cada prefixo de cada linha recomenda o lance seguinte; um lado sem
    /// lances passa automaticamente.
    pub fn from_lines(lines: &[&str]) -> Result<Self> {
        let mut book = Self::new();

        for line in lines {
            let mut board = Board::new();
            let mut player = Player::Black;

            for token in line.split_whitespace() {
                let mv: Move = token.parse()?;
                if !board.has_legal_moves(player) {
                    player = !player;
                }
                let next = board.apply_move(player, mv)?;
                book.insert(board.fingerprint(), mv);
                board = next;
                player = !player;
            }
        }

        Ok(book)
    }

    /// Acrescenta uma recomendação, mantendo a ordem de inserção e sem repetir.
    pub fn insert(&mut self, fingerprint: Fingerprint, mv: Move) {
        let moves = self.entries.entry(fingerprint).or_default();
        if !moves.contains(&mv) {
            moves.push(mv);
        }
    }

    pub fn lookup(&self, fingerprint: &Fingerprint) -> Option<&[Move]> {
        self.entries.get(fingerprint).map(Vec::as_slice)
    }

    /// Número de posições no livro
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
