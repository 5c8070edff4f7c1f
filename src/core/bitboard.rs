// Operações básicas de bitboard usadas pela geração de lances

use super::types::Bitboard;

pub const CORNER_MASK: Bitboard = 0x8100_0000_0000_0081;
/// Casas X e C: as 12 vizinhas dos cantos.
pub const CORNER_NEIGHBOUR_MASK: Bitboard = 0x42C3_0000_0000_C342;

const NOT_COL_0: Bitboard = 0xFEFE_FEFE_FEFE_FEFE;
const NOT_COL_7: Bitboard = 0x7F7F_7F7F_7F7F_7F7F;

/// As 8 direções como (delta_linha, delta_coluna).
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Desloca todas as casas do bitboard um passo na direção dada.
/// Bits que sairiam pela borda são descartados (sem "wrap" entre colunas).
#[inline(always)]
pub fn shift(bb: Bitboard, (dr, dc): (i8, i8)) -> Bitboard {
    let amount = dr as i32 * 8 + dc as i32;
    let shifted = if amount >= 0 {
        bb << amount
    } else {
        bb >> -amount
    };
    match dc {
        1 => shifted & NOT_COL_0,
        -1 => shifted & NOT_COL_7,
        _ => shifted,
    }
}

#[inline(always)]
pub fn popcount(bb: Bitboard) -> u32 {
    bb.count_ones()
}

/// Remove e retorna o índice do bit menos significativo
#[inline(always)]
pub fn pop_lsb(bb: &mut Bitboard) -> u32 {
    let index = bb.trailing_zeros();
    *bb &= bb.wrapping_sub(1);
    index
}

/// Itera os índices dos bits setados em ordem crescente (row-major).
pub struct BitboardIterator {
    bb: Bitboard,
}

impl BitboardIterator {
    pub fn new(bb: Bitboard) -> Self {
        BitboardIterator { bb }
    }
}

impl Iterator for BitboardIterator {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bb == 0 {
            None
        } else {
            Some(pop_lsb(&mut self.bb))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = popcount(self.bb) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Move;

    #[test]
    fn test_masks_match_move_tables() {
        let corners: Bitboard = Move::CORNERS.iter().fold(0, |acc, m| acc | m.bit());
        let neighbours: Bitboard = Move::CORNER_NEIGHBOURS
            .iter()
            .fold(0, |acc, m| acc | m.bit());
        assert_eq!(corners, CORNER_MASK);
        assert_eq!(neighbours, CORNER_NEIGHBOUR_MASK);
    }

    #[test]
    fn test_shift_does_not_wrap_columns() {
        let h1 = 1u64 << 7;
        assert_eq!(shift(h1, (0, 1)), 0);
        let a2 = 1u64 << 8;
        assert_eq!(shift(a2, (0, -1)), 0);
        assert_eq!(shift(a2, (-1, 0)), 1);
        assert_eq!(shift(1, (1, 1)), 1u64 << 9);
    }

    #[test]
    fn test_shift_drops_off_board() {
        let h8 = 1u64 << 63;
        assert_eq!(shift(h8, (1, 0)), 0);
        assert_eq!(shift(1, (-1, 0)), 0);
    }

    #[test]
    fn test_bitboard_iterator() {
        let bb = 0x0000000000000105; // bits nas posições 0, 2, 8
        let squares: Vec<u32> = BitboardIterator::new(bb).collect();
        assert_eq!(squares, vec![0, 2, 8]);
        assert_eq!(BitboardIterator::new(bb).len(), 3);
    }

    #[test]
    fn test_pop_lsb() {
        let mut bb = 0b1010_0000u64;
        assert_eq!(pop_lsb(&mut bb), 5);
        assert_eq!(bb, 0b1000_0000);
    }
}
