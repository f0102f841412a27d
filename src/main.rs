use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chess_rules::chess_errors::ChessError;
use chess_rules::game_state::chess_types::PieceKind;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::legal_move_generator::{generate_all_legal_moves, LegalMoveGenerator};
use chess_rules::move_generation::move_selection::{play_move, select_moves};
use chess_rules::move_generation::perft::{perft, perft_divide, PerftCounts};
use chess_rules::moves::move_descriptions::ChessMove;
use chess_rules::utils::algebraic::algebraic_to_square;
use chess_rules::utils::long_algebraic::parse_coordinate_move;
use chess_rules::utils::random_playout::random_playout;
use chess_rules::utils::render_game_state::render_game_state;

#[derive(Debug, Parser)]
#[command(name = "chess_rules", version, about = "Chess rules engine: play, perft and random playouts")]
struct Cli {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play moves typed in coordinate notation (e.g. e2e4, e7e8q).
    Play {
        #[arg(long)]
        fen: Option<String>,
    },
    /// Count leaf nodes of the legal move tree.
    Perft {
        #[arg(long)]
        depth: u8,
        #[arg(long)]
        fen: Option<String>,
        /// Print a per-root-move breakdown.
        #[arg(long)]
        divide: bool,
    },
    /// Play random legal moves from a position.
    Playout {
        #[arg(long, default_value_t = 200)]
        plies: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        fen: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Play { fen } => play(load_position(fen.as_deref())?),
        Command::Perft { depth, fen, divide } => {
            run_perft(&load_position(fen.as_deref())?, depth, divide);
            Ok(())
        }
        Command::Playout { plies, seed, fen } => {
            run_playout(load_position(fen.as_deref())?, plies, seed);
            Ok(())
        }
    }
}

fn load_position(fen: Option<&str>) -> Result<GameState, ChessError> {
    match fen {
        Some(fen) => GameState::from_fen(fen),
        None => Ok(GameState::new_game()),
    }
}

fn run_perft(game_state: &GameState, depth: u8, divide: bool) {
    let started = Instant::now();

    let counts = if divide {
        let mut total = PerftCounts::default();
        for (mv, counts) in perft_divide(&LegalMoveGenerator, game_state, depth) {
            println!("{mv}: {}", counts.nodes);
            total += counts;
        }
        total
    } else {
        perft(&LegalMoveGenerator, game_state, depth)
    };

    let elapsed = started.elapsed();
    println!("nodes {}", counts.nodes);
    println!(
        "captures {} en_passant {} castles {} promotions {} checks {}",
        counts.captures, counts.en_passant, counts.castles, counts.promotions, counts.checks
    );

    let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    info!(depth, nodes = counts.nodes, elapsed_ms = elapsed.as_millis() as u64, nps = nps as u64, "perft finished");
}

fn run_playout(mut game_state: GameState, plies: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, plies, "starting random playout");

    let mut rng = StdRng::seed_from_u64(seed);
    let moves = random_playout(&mut game_state, plies, &mut rng);

    let text: Vec<String> = moves.iter().map(ChessMove::to_string).collect();
    println!("{}", text.join(" "));
    println!("{}", render_game_state(&game_state));
    println!("{} plies played, {} to move", moves.len(), game_state.side_to_move());
}

fn play(mut game_state: GameState) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        println!("{}", render_game_state(&game_state));

        let side = game_state.side_to_move();
        if generate_all_legal_moves(&game_state).is_empty() {
            println!("{side} has no legal moves");
            return Ok(());
        }
        if game_state.is_in_check(side) {
            println!("{side} is in check");
        }

        print!("{side} to move> ");
        stdout.flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            _ => {}
        }

        if let Some(square_name) = input.strip_prefix("moves") {
            list_moves(&game_state, square_name.trim());
            continue;
        }

        let (from, to, promotion) = match parse_coordinate_move(input) {
            Ok(parsed) => parsed,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let result = match play_move(&mut game_state, from, to, promotion) {
            Err(ChessError::PromotionChoiceRequired { .. }) => {
                print!("promote to (q/r/b/n)> ");
                stdout.flush()?;
                let Some(choice) = lines.next().transpose()? else {
                    return Ok(());
                };
                let kind = choice
                    .trim()
                    .chars()
                    .next()
                    .and_then(PieceKind::from_letter)
                    .unwrap_or(PieceKind::Queen);
                play_move(&mut game_state, from, to, Some(kind))
            }
            other => other,
        };

        if let Err(err) = result {
            println!("{err}");
        }
    }
}

fn list_moves(game_state: &GameState, square_name: &str) {
    let moves = if square_name.is_empty() {
        Ok(generate_all_legal_moves(game_state))
    } else {
        algebraic_to_square(square_name).and_then(|square| select_moves(game_state, square))
    };

    match moves {
        Ok(moves) => {
            let text: Vec<String> = moves.iter().map(ChessMove::to_string).collect();
            println!("{}", text.join(" "));
        }
        Err(err) => println!("{err}"),
    }
}
