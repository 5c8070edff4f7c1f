use crate::core::*;
use crate::error::Result;
use crate::search::evaluation::{DiscDifferential, Evaluator};
use crate::search::parallel::{best, ParallelDispatcher, ScoredMove};
use log::{debug, trace};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Resultado da busca Alpha-Beta
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best: Option<ScoredMove>,
    pub scored: Vec<ScoredMove>,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_elapsed: Duration,
}

/// Minimax com poda alpha-beta. As folhas são avaliadas com `leaf`
/// (diferença de discos por padrão) do ponto de vista do jogador da raiz.
pub struct Minimax {
    leaf: Arc<dyn Evaluator>,
    nodes_searched: AtomicU64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::with_leaf(Arc::new(DiscDifferential))
    }

    pub fn with_leaf(leaf: Arc<dyn Evaluator>) -> Self {
        Minimax {
            leaf,
            nodes_searched: AtomicU64::new(0),
        }
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched.load(Ordering::Relaxed)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &self,
        board: &Board,
        depth: u8,
        to_move: Player,
        root: Player,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        stage: GameStage,
    ) -> i32 {
        self.nodes_searched.fetch_add(1, Ordering::Relaxed);

        if depth == 0 || !board.has_legal_moves(to_move) {
            return self.leaf.score(board, root, stage);
        }

        if maximizing {
            let mut best_score = i32::MIN;
            for (_, child) in board.successors(to_move) {
                let score =
                    self.minimax(&child, depth - 1, !to_move, root, false, alpha, beta, stage);
                best_score = best_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break; // corte beta
                }
            }
            best_score
        } else {
            let mut best_score = i32::MAX;
            for (_, child) in board.successors(to_move) {
                let score =
                    self.minimax(&child, depth - 1, !to_move, root, true, alpha, beta, stage);
                best_score = best_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break; // corte alpha
                }
            }
            best_score
        }
    }

    /// Busca na raiz: cada candidato é pontuado com a heurística no tabuleiro
    /// resultante mais, se `depth > 0`, o minimax abaixo dele.
    /// Cada candidato usa a janela completa, logo o resultado não depende
    /// do número de workers.
    pub fn search_root(
        &self,
        board: &Board,
        player: Player,
        depth: u8,
        heuristic: &dyn Evaluator,
        dispatcher: &ParallelDispatcher,
    ) -> Result<SearchResult> {
        let start_time = Instant::now();
        let nodes_before = self.nodes_searched();
        let stage = board.stage();
        let moves = board.legal_moves(player);

        let scored = dispatcher.evaluate(board, player, &moves, |child| {
            let mut score = heuristic.score(child, player, stage);
            if depth > 0 {
                score += self.minimax(
                    child,
                    depth - 1,
                    !player,
                    player,
                    false,
                    i32::MIN,
                    i32::MAX,
                    stage,
                );
            }
            score
        })?;

        for candidate in &scored {
            trace!("root candidate {} scored {}", candidate.mv, candidate.score);
        }

        let result = SearchResult {
            best: best(&scored),
            scored,
            depth,
            nodes_searched: self.nodes_searched() - nodes_before,
            time_elapsed: start_time.elapsed(),
        };

        debug!(
            "search depth {} candidates {} nodes {} time {}ms workers {}",
            result.depth,
            result.scored.len(),
            result.nodes_searched,
            result.time_elapsed.as_millis(),
            dispatcher.workers()
        );

        Ok(result)
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::evaluation::{CornerAdjacency, Strategy};
    use crate::search::weights::WeightTables;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    // Minimax sem poda, para comparar com a versão alpha-beta
    fn plain_minimax(board: &Board, depth: u8, to_move: Player, root: Player, maximizing: bool) -> i32 {
        let children: Vec<Board> = board.successors(to_move).map(|(_, b)| b).collect();
        if depth == 0 || children.is_empty() {
            return DiscDifferential.score(board, root, board.stage());
        }
        let scores = children
            .iter()
            .map(|child| plain_minimax(child, depth - 1, !to_move, root, !maximizing));
        if maximizing {
            scores.max().unwrap()
        } else {
            scores.min().unwrap()
        }
    }

    // Posição após 7 lances, brancas a jogar
    fn midgame() -> Board {
        let mut board = Board::new();
        let mut player = Player::Black;
        for s in ["f5", "d6", "c3", "d3", "c4", "f4", "f6"] {
            board = board.apply_move(player, mv(s)).unwrap();
            player = !player;
        }
        board
    }

    #[test]
    fn test_depth_zero_returns_leaf_score() {
        let search = Minimax::new();
        let board = midgame();
        for maximizing in [true, false] {
            let score = search.minimax(
                &board,
                0,
                Player::White,
                Player::Black,
                maximizing,
                i32::MIN,
                i32::MAX,
                board.stage(),
            );
            assert_eq!(score, DiscDifferential.score(&board, Player::Black, board.stage()));
        }
    }

    #[test]
    fn test_no_moves_returns_leaf_score() {
        // Brancas sem lances: não há nenhum disco branco
        let board: Board = "
            BB......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(!board.has_legal_moves(Player::White));
        let search = Minimax::new();
        let score = search.minimax(
            &board,
            4,
            Player::White,
            Player::White,
            true,
            i32::MIN,
            i32::MAX,
            board.stage(),
        );
        assert_eq!(score, -2);
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        let board = midgame();
        let search = Minimax::new();
        for depth in 1..=4 {
            let pruned = search.minimax(
                &board,
                depth,
                Player::White,
                Player::White,
                true,
                i32::MIN,
                i32::MAX,
                board.stage(),
            );
            assert_eq!(pruned, plain_minimax(&board, depth, Player::White, Player::White, true));
        }
    }

    #[test]
    fn test_minimax_is_deterministic() {
        let board = midgame();
        let a = Minimax::new();
        let b = Minimax::new();
        let run = |s: &Minimax| {
            s.minimax(&board, 3, Player::White, Player::White, true, i32::MIN, i32::MAX, board.stage())
        };
        assert_eq!(run(&a), run(&b));
        assert_eq!(a.nodes_searched(), b.nodes_searched());
    }

    #[test]
    fn test_root_is_independent_of_worker_count() {
        let board = midgame();
        let heuristic = Strategy::Composite.build(Arc::new(WeightTables::standard()));
        let one = ParallelDispatcher::new(1).unwrap();
        let many = ParallelDispatcher::new(6).unwrap();
        let search = Minimax::new();

        let sequential = search
            .search_root(&board, Player::White, 3, heuristic.as_ref(), &one)
            .unwrap();
        let parallel = search
            .search_root(&board, Player::White, 3, heuristic.as_ref(), &many)
            .unwrap();

        assert_eq!(sequential.scored, parallel.scored);
        assert_eq!(sequential.best, parallel.best);
        assert_eq!(sequential.nodes_searched, parallel.nodes_searched);
    }

    #[test]
    fn test_root_depth_zero_is_heuristic_only() {
        let board = Board::new();
        let dispatcher = ParallelDispatcher::new(2).unwrap();
        let search = Minimax::new();
        let result = search
            .search_root(&board, Player::Black, 0, &CornerAdjacency, &dispatcher)
            .unwrap();
        assert_eq!(result.nodes_searched, 0);
        for candidate in &result.scored {
            let child = board.apply_move(Player::Black, candidate.mv).unwrap();
            assert_eq!(
                candidate.score,
                CornerAdjacency.score(&child, Player::Black, board.stage())
            );
        }
        // Todos empatam: vence o primeiro em ordem row-major
        assert_eq!(result.best.map(|b| b.mv), Some(mv("d3")));
    }

    #[test]
    fn test_root_score_adds_minimax_below() {
        let board = midgame();
        let dispatcher = ParallelDispatcher::new(1).unwrap();
        let search = Minimax::new();
        let stage = board.stage();
        let result = search
            .search_root(&board, Player::White, 2, &CornerAdjacency, &dispatcher)
            .unwrap();
        for candidate in &result.scored {
            let child = board.apply_move(Player::White, candidate.mv).unwrap();
            let expected = CornerAdjacency.score(&child, Player::White, stage)
                + plain_minimax(&child, 1, Player::Black, Player::White, false);
            assert_eq!(candidate.score, expected);
        }
    }

    #[test]
    fn test_root_without_moves() {
        let board: Board = "
            BB......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let dispatcher = ParallelDispatcher::new(2).unwrap();
        let result = Minimax::new()
            .search_root(&board, Player::White, 3, &CornerAdjacency, &dispatcher)
            .unwrap();
        assert!(result.best.is_none());
        assert!(result.scored.is_empty());
    }
}
