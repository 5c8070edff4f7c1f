// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board, a verificação de legalidade
// e a aplicação de lances (colocação + viragem de discos).

use super::bitboard::{popcount, shift, BitboardIterator, DIRECTIONS};
use super::types::*;
use crate::error::{EngineError, Result};
use std::fmt;
use std::str::FromStr;

// A struct principal do tabuleiro, usando Bitboards.
// É um valor imutável: aplicar um lance devolve um Board novo, nunca
// altera o anterior. Por isso pode ser copiado livremente entre threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

/// Serialização exata do tabuleiro completo, usada como chave do livro de aberturas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    black: Bitboard,
    white: Bitboard,
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = Board {
            black: self.black,
            white: self.white,
        };
        for index in 0..64 {
            write!(f, "{}", board.cell(Move::from_index(index)).symbol())?;
        }
        Ok(())
    }
}

impl Board {
    /// Cria um novo tabuleiro na posição inicial padrão:
    /// brancas em (3,3) e (4,4), pretas em (3,4) e (4,3).
    pub fn new() -> Self {
        const WHITE_START: Bitboard = (1 << 27) | (1 << 36);
        const BLACK_START: Bitboard = (1 << 28) | (1 << 35);
        Board {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    pub fn empty() -> Self {
        Board { black: 0, white: 0 }
    }

    pub fn from_cells(cells: &[[Cell; 8]; 8]) -> Self {
        let mut board = Board::empty();
        for (row, line) in cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                let bit = 1u64 << (row * 8 + col);
                match cell {
                    Cell::Black => board.black |= bit,
                    Cell::White => board.white |= bit,
                    Cell::Empty => {}
                }
            }
        }
        board
    }

    pub fn cells(&self) -> [[Cell; 8]; 8] {
        let mut cells = [[Cell::Empty; 8]; 8];
        for (index, cell) in (0..64).map(|i| (i, self.cell(Move::from_index(i)))) {
            cells[(index / 8) as usize][(index % 8) as usize] = cell;
        }
        cells
    }

    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        let bit = mv.bit();
        if self.black & bit != 0 {
            Cell::Black
        } else if self.white & bit != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    #[inline]
    fn sides(&self, player: Player) -> (Bitboard, Bitboard) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    pub fn count(&self, player: Player) -> u32 {
        popcount(self.discs(player))
    }

    pub fn disc_count(&self) -> u32 {
        popcount(self.occupied())
    }

    pub fn empty_count(&self) -> u32 {
        64 - self.disc_count()
    }

    pub fn stage(&self) -> GameStage {
        GameStage::from_disc_count(self.disc_count())
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            black: self.black,
            white: self.white,
        }
    }

    /// Discos do adversário que `mv` viraria. Zero se a casa estiver
    /// ocupada ou nenhuma direção tiver uma sequência fechada.
    pub fn flips(&self, player: Player, mv: Move) -> Bitboard {
        let bit = mv.bit();
        if self.occupied() & bit != 0 {
            return 0;
        }

        let (own, opp) = self.sides(player);
        let mut flips = 0;
        for dir in DIRECTIONS {
            let mut run = 0;
            let mut cursor = shift(bit, dir);
            while cursor & opp != 0 {
                run |= cursor;
                cursor = shift(cursor, dir);
            }
            // Só conta se a sequência termina num disco próprio (não vazio nem borda)
            if cursor & own != 0 {
                flips |= run;
            }
        }
        flips
    }

    pub fn is_legal(&self, player: Player, mv: Move) -> bool {
        self.flips(player, mv) != 0
    }

    /// Máscara com todas as casas legais para `player`.
    pub fn legal_mask(&self, player: Player) -> Bitboard {
        let (own, opp) = self.sides(player);
        let empty = !(own | opp);
        let mut moves = 0;

        for dir in DIRECTIONS {
            // Uma sequência de adversários tem no máximo 6 casas
            let mut run = shift(own, dir) & opp;
            for _ in 0..5 {
                run |= shift(run, dir) & opp;
            }
            moves |= shift(run, dir) & empty;
        }
        moves
    }

    /// Lances legais em ordem row-major. Essa ordem é usada como desempate.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        BitboardIterator::new(self.legal_mask(player))
            .map(Move::from_index)
            .collect()
    }

    pub fn has_legal_moves(&self, player: Player) -> bool {
        self.legal_mask(player) != 0
    }

    /// Executa um lance e devolve o tabuleiro resultante.
    pub fn apply_move(&self, player: Player, mv: Move) -> Result<Board> {
        let flips = self.flips(player, mv);
        if flips == 0 {
            return Err(EngineError::InvalidMove { mv, player });
        }
        Ok(self.place(player, mv, flips))
    }

    /// Pares (lance, tabuleiro resultante) de todos os lances legais, em ordem row-major.
    pub fn successors(&self, player: Player) -> impl Iterator<Item = (Move, Board)> + '_ {
        BitboardIterator::new(self.legal_mask(player)).map(move |index| {
            let mv = Move::from_index(index);
            (mv, self.place(player, mv, self.flips(player, mv)))
        })
    }

    #[inline]
    fn place(&self, player: Player, mv: Move, flips: Bitboard) -> Board {
        let (own, opp) = self.sides(player);
        let own = own | mv.bit() | flips;
        let opp = opp & !flips;
        match player {
            Player::Black => Board { black: own, white: opp },
            Player::White => Board { black: opp, white: own },
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Lê 8 linhas de `.`/`B`/`W`. Espaços e quebras de linha são ignorados.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != 64 {
            return Err(EngineError::ParseBoard(format!(
                "expected 64 cells, found {}",
                symbols.len()
            )));
        }

        let mut board = Board::empty();
        for (index, symbol) in symbols.into_iter().enumerate() {
            let bit = 1u64 << index;
            match symbol.to_ascii_uppercase() {
                '.' => {}
                'B' => board.black |= bit,
                'W' => board.white |= bit,
                other => {
                    return Err(EngineError::ParseBoard(format!(
                        "invalid cell symbol '{}'",
                        other
                    )))
                }
            }
        }
        Ok(board)
    }
}
