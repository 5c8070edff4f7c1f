//! Monte Carlo rollout, usado como recurso quando o minimax não decide.
//!
//! Para cada candidato são jogadas `simulations` partidas aleatórias até
//! nenhum dos lados ter lances. A pontuação do candidato é a SOMA das
//! avaliações finais; como todos os candidatos recebem o mesmo número de
//! simulações, a ordenação é a mesma que a da média.
//!
//! O gerador aleatório é sempre injetado pelo chamador.

use crate::core::*;
use crate::search::evaluation::Evaluator;
use crate::search::parallel::ScoredMove;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarlo {
    simulations: u32,
}

impl MonteCarlo {
    pub fn new(simulations: u32) -> Self {
        MonteCarlo { simulations }
    }

    pub fn simulations(&self) -> u32 {
        self.simulations
    }

    /// Melhor candidato para `player`, ou `None` se não houver lances.
    /// Empates ficam com o primeiro na ordem row-major.
    pub fn select<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        evaluator: &dyn Evaluator,
        rng: &mut R,
    ) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;

        for (mv, child) in board.successors(player) {
            let score = self.score_candidate(&child, player, evaluator, rng);
            trace!("rollout candidate {} scored {}", mv, score);

            best = match best {
                Some(current) if current.score >= score => Some(current),
                _ => Some(ScoredMove::new(mv, score)),
            };
        }

        best
    }

    /// Com 0 simulações avalia diretamente o tabuleiro após o lance.
    fn score_candidate<R: Rng + ?Sized>(
        &self,
        child: &Board,
        player: Player,
        evaluator: &dyn Evaluator,
        rng: &mut R,
    ) -> i32 {
        if self.simulations == 0 {
            return evaluator.score(child, player, child.stage());
        }

        (0..self.simulations)
            .map(|_| {
                let end = playout(child, !player, rng);
                evaluator.score(&end, player, end.stage())
            })
            .sum()
    }
}

/// Joga lances aleatórios uniformes a partir de `start` até dois passes seguidos.
pub fn playout<R: Rng + ?Sized>(start: &Board, mut to_move: Player, rng: &mut R) -> Board {
    let mut board = *start;
    let mut passes = 0;

    while passes < 2 {
        let children: Vec<Board> = board.successors(to_move).map(|(_, b)| b).collect();
        match children.choose(rng) {
            Some(next) => {
                board = *next;
                passes = 0;
            }
            None => passes += 1,
        }
        to_move = !to_move;
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::evaluation::{CornerAdjacency, DiscDifferential};
    use crate::search::parallel::best;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_simulations_is_direct_evaluation() {
        let board = Board::new().apply_move(Player::Black, "f5".parse().unwrap()).unwrap();
        let mc = MonteCarlo::new(0);
        let mut rng = StdRng::seed_from_u64(1);
        let chosen = mc.select(&board, Player::White, &CornerAdjacency, &mut rng).unwrap();

        let scored: Vec<ScoredMove> = board
            .successors(Player::White)
            .map(|(mv, child)| {
                ScoredMove::new(mv, CornerAdjacency.score(&child, Player::White, child.stage()))
            })
            .collect();
        let expected = best(&scored).unwrap();
        assert_eq!(chosen, expected);
    }

    #[test]
    fn test_zero_simulations_does_not_touch_rng() {
        let board = Board::new();
        let mc = MonteCarlo::new(0);
        let mut used = StdRng::seed_from_u64(9);
        let _ = mc.select(&board, Player::Black, &DiscDifferential, &mut used);
        let mut fresh = StdRng::seed_from_u64(9);
        assert_eq!(used.gen::<u64>(), fresh.gen::<u64>());
    }

    #[test]
    fn test_playout_ends_with_no_moves() {
        let mut rng = StdRng::seed_from_u64(42);
        let end = playout(&Board::new(), Player::Black, &mut rng);
        assert!(!end.has_legal_moves(Player::Black));
        assert!(!end.has_legal_moves(Player::White));
        assert!(end.disc_count() > 4);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let mc = MonteCarlo::new(5);
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        assert_eq!(
            mc.select(&board, Player::Black, &DiscDifferential, &mut a),
            mc.select(&board, Player::Black, &DiscDifferential, &mut b)
        );
    }

    #[test]
    fn test_choice_is_legal() {
        let board = Board::new();
        let mc = MonteCarlo::new(3);
        let mut rng = StdRng::seed_from_u64(5);
        let chosen = mc.select(&board, Player::Black, &CornerAdjacency, &mut rng).unwrap();
        assert!(board.is_legal(Player::Black, chosen.mv));
    }

    #[test]
    fn test_no_moves_yields_none() {
        let board: Board = format!("BB{}", ".".repeat(62)).parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(MonteCarlo::new(4)
            .select(&board, Player::White, &DiscDifferential, &mut rng)
            .is_none());
    }
}
