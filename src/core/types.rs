// Ficheiro: src/core/types.rs
// Descrição: Tipos fundamentais do jogo: casas, jogadores, lances e fases.

use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

// Um Bitboard é um inteiro de 64 bits sem sinal. Cada bit representa uma casa.
// Bit 0 = (0,0) = a1, Bit 7 = (0,7) = h1, ..., Bit 63 = (7,7) = h8.
// A ordem crescente dos bits coincide com a ordem row-major.
pub type Bitboard = u64;

pub const BOARD_SIZE: u8 = 8;

/// Conteúdo de uma casa do tabuleiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'W',
            Cell::Black => 'B',
        }
    }
}

// Enum para representar a cor de um jogador. Não existe terceiro estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Player {
        !self
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Coordenada (linha, coluna), ambas em [0,7].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    pub const CORNERS: [Move; 4] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 7 },
        Move { row: 7, col: 0 },
        Move { row: 7, col: 7 },
    ];

    /// As 12 casas vizinhas dos cantos (casas X e C).
    pub const CORNER_NEIGHBOURS: [Move; 12] = [
        Move { row: 0, col: 1 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 0, col: 6 },
        Move { row: 1, col: 6 },
        Move { row: 1, col: 7 },
        Move { row: 6, col: 0 },
        Move { row: 6, col: 1 },
        Move { row: 7, col: 1 },
        Move { row: 6, col: 6 },
        Move { row: 6, col: 7 },
        Move { row: 7, col: 6 },
    ];

    pub fn new(row: u8, col: u8) -> Result<Self, EngineError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EngineError::InvalidCoordinate { row, col });
        }
        Ok(Move { row, col })
    }

    /// Constrói a partir de um índice 0..64 já validado pelo chamador.
    #[inline]
    pub(crate) fn from_index(index: u32) -> Self {
        debug_assert!(index < 64);
        Move {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn index(self) -> u32 {
        self.row as u32 * 8 + self.col as u32
    }

    #[inline]
    pub fn bit(self) -> Bitboard {
        1u64 << self.index()
    }

    pub fn is_corner(self) -> bool {
        Move::CORNERS.contains(&self)
    }

    pub fn is_corner_neighbour(self) -> bool {
        Move::CORNER_NEIGHBOURS.contains(&self)
    }
}

// Notação algébrica: coluna a-h, linha 1-8. (0,3) == "d1".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.col + b'a') as char;
        let rank = (self.row + b'1') as char;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(EngineError::ParseMove(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(EngineError::ParseMove(s.to_string()));
        }
        Move::new(rank - b'1', file - b'a')
    }
}

/// Fase do jogo, derivada do número de discos. Nunca é armazenada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStage {
    Early,
    Mid,
    Late,
}

impl GameStage {
    pub fn from_disc_count(disc_count: u32) -> Self {
        if disc_count < 20 {
            GameStage::Early
        } else if disc_count < 50 {
            GameStage::Mid
        } else {
            GameStage::Late
        }
    }
}
