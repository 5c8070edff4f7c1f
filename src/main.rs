// Motor de Reversi - partida motor contra motor na linha de comandos
use clap::{Parser, ValueEnum};
use flexi_logger::Logger;
use log::info;
use pelanca_reversi::config::{default_workers, DEFAULT_DEPTH, DEFAULT_SIMULATIONS};
use pelanca_reversi::{Board, Engine, EngineConfig, Player, Policy, Strategy};
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Chain,
    Search,
    Rollout,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Composite,
    Corners,
}

/// Joga uma partida completa de Reversi entre duas instâncias do motor
#[derive(Parser, Debug)]
#[command(name = "pelanca-reversi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Política das pretas
    #[arg(long, value_enum, default_value = "chain")]
    black_policy: PolicyArg,

    /// Política das brancas
    #[arg(long, value_enum, default_value = "search")]
    white_policy: PolicyArg,

    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    #[arg(short, long, default_value_t = DEFAULT_SIMULATIONS)]
    simulations: u32,

    /// Número de workers (padrão: 2x núcleos)
    #[arg(short, long)]
    workers: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "composite")]
    strategy: StrategyArg,

    /// Desliga o livro de aberturas
    #[arg(long)]
    no_book: bool,
}

impl Cli {
    fn engine_config(&self, policy: PolicyArg) -> EngineConfig {
        let strategy = match self.strategy {
            StrategyArg::Composite => Strategy::Composite,
            StrategyArg::Corners => Strategy::CornerAdjacency,
        };
        let mut config = EngineConfig::default()
            .with_strategy(strategy)
            .with_depth(self.depth)
            .with_simulations(self.simulations)
            .with_workers(self.workers.unwrap_or_else(default_workers))
            .with_opening_book(!self.no_book);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        match policy {
            PolicyArg::Chain => config.with_policy(Policy::PriorityChain),
            PolicyArg::Search => config.with_policy(Policy::Search),
            PolicyArg::Rollout => config.with_policy(Policy::Search).with_minimax(false),
        }
    }
}

fn print_board(board: &Board) {
    for row in board.cells().iter() {
        let line: String = row.iter().map(|cell| cell.symbol()).collect();
        println!("{}", line);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let mut black = Engine::new(cli.engine_config(cli.black_policy))?;
    let mut white = Engine::new(cli.engine_config(cli.white_policy))?;

    let mut board = Board::new();
    let mut player = Player::Black;
    let mut passes = 0;
    let mut ply = 0;
    let start = Instant::now();

    while passes < 2 && board.empty_count() > 0 {
        let engine = match player {
            Player::Black => &mut black,
            Player::White => &mut white,
        };
        match engine.select_move(&board, player)? {
            Some(mv) => {
                board = board.apply_move(player, mv)?;
                passes = 0;
                ply += 1;
                info!(
                    "{:>2}. {} {} ({:?})",
                    ply,
                    player,
                    mv,
                    engine.last_decision()
                );
            }
            None => {
                passes += 1;
                info!("{} passa", player);
            }
        }
        player = !player;
    }

    println!();
    print_board(&board);
    println!();

    let blacks = board.count(Player::Black);
    let whites = board.count(Player::White);
    info!(
        "Fim: pretas {} brancas {} em {} lances ({:.2}s)",
        blacks,
        whites,
        ply,
        start.elapsed().as_secs_f64()
    );
    match blacks.cmp(&whites) {
        std::cmp::Ordering::Greater => info!("Vencedor: {}", Player::Black),
        std::cmp::Ordering::Less => info!("Vencedor: {}", Player::White),
        std::cmp::Ordering::Equal => info!("Empate"),
    }

    Ok(())
}
