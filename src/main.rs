//! Terminal front-end for the chess companion
//!
//! Reads commands from stdin, prints the board after every change and
//! saves progress when a game ends.

use anyhow::{Context, Result};
use chess_companion::core::settings_persistence::{load_state, save_state, state_path};
use chess_companion::core::{SavedState, SessionConfig};
use chess_companion::game::resources::PROMOTION_CHOICES;
use chess_companion::game::{
    ChessSession, GameError, GameMode, NewGameOptions, PlayerColor, SubmitOutcome,
};
use chess_engine::{parse_square, Difficulty, MoveSpec, PieceKind, Side};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Longest the front-end waits for one AI reply
const AI_WAIT: Duration = Duration::from_secs(30);

#[derive(Parser, Debug)]
#[command(name = "chess_companion", version, about = "Play chess against a friendly AI")]
struct Args {
    /// Game mode: ai or local
    #[arg(long)]
    mode: Option<GameMode>,

    /// AI strength: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Your colour against the AI: white or black
    #[arg(long)]
    color: Option<PlayerColor>,

    /// Seed for reproducible AI play
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the AI moves, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Do not read or write saved progress
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = SessionConfig::from_env().context("reading configuration")?;
    if let Some(delay) = args.delay_ms {
        config.ai_think_delay_ms = delay;
    }
    if args.seed.is_some() {
        config.ai_seed = args.seed;
    }

    let save_path = (!args.no_save).then(state_path);
    let saved = save_path
        .as_deref()
        .map(load_state)
        .unwrap_or_default();

    let mut session = ChessSession::new(&config);
    session.set_progress(saved.progress.clone());
    let preferences = saved.settings();
    session.new_game(NewGameOptions {
        mode: Some(args.mode.unwrap_or(preferences.mode)),
        difficulty: Some(args.difficulty.unwrap_or(preferences.difficulty)),
        player_color: Some(args.color.unwrap_or(preferences.player_color)),
    });

    info!("[SESSION] Starting with {:?}", session.settings());
    println!("Type 'help' for commands.");
    run(&mut session, save_path)
}

fn run(session: &mut ChessSession, save_path: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let mut saved_generation = None;

    loop {
        if session.is_ai_thinking() {
            print_board(session);
            session.wait_for_ai(AI_WAIT);
        }
        print_board(session);

        if session.status().is_game_over() && saved_generation != Some(session.generation()) {
            saved_generation = Some(session.generation());
            if let Some(path) = &save_path {
                let state = SavedState::new(session.get_progress(), session.preferences());
                save_state(path, &state);
            }
            println!("Type 'new' to play again or 'stats' to see your progress.");
        }

        print!("> ");
        io::stdout().flush().context("flushing stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading stdin")? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if let Err(e) = handle_command(session, line) {
            println!("{e}");
        }
    }

    if let Some(path) = &save_path {
        let state = SavedState::new(session.get_progress(), session.preferences());
        save_state(path, &state);
    }
    Ok(())
}

fn handle_command(session: &mut ChessSession, line: &str) -> Result<()> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let argument = words.next();

    match (command, argument) {
        ("help", _) => print_help(),
        ("moves", Some(text)) => {
            let square = parse_square(text)?;
            let targets: Vec<String> = session
                .legal_destinations(square)
                .iter()
                .map(|sq| sq.to_string())
                .collect();
            if targets.is_empty() {
                println!("No legal moves from {square}");
            } else {
                println!("{square}: {}", targets.join(" "));
            }
        }
        ("undo", _) => {
            let plies = session.undo()?;
            println!("Took back {plies} move(s)");
        }
        ("resign", _) => session.resign()?,
        ("new", _) => session.new_game(NewGameOptions::default()),
        ("mode", Some(text)) => {
            session.set_mode(text.parse().map_err(anyhow::Error::msg)?);
            println!("Mode will apply to the next new game");
        }
        ("difficulty", Some(text)) => {
            session.set_difficulty(text.parse().map_err(anyhow::Error::msg)?);
            println!("Difficulty will apply to the next new game");
        }
        ("color", Some(text)) => {
            session.set_player_color(text.parse().map_err(anyhow::Error::msg)?);
            println!("Colour will apply to the next new game");
        }
        ("promote", Some(text)) => {
            let piece = text
                .chars()
                .next()
                .and_then(PieceKind::from_char)
                .filter(|role| PROMOTION_CHOICES.contains(role))
                .ok_or_else(|| anyhow::anyhow!("Choose q, r, b or n"))?;
            session.resolve_promotion(piece)?;
        }
        ("cancel", _) => session.cancel_promotion()?,
        ("stats", _) => print_stats(session),
        (text, None) => {
            let mv: MoveSpec = text.parse()?;
            match session.submit_move(mv.from, mv.to, mv.promotion) {
                Ok(SubmitOutcome::PromotionPending(_)) => {
                    println!("Promote to which piece? (promote q|r|b|n, or cancel)");
                }
                Ok(SubmitOutcome::Applied(_)) => {}
                Err(GameError::NotYourTurn) => {
                    warn!("[SESSION] Move attempted on the AI's turn");
                    println!("Wait for the AI to move");
                }
                Err(e) => return Err(e.into()),
            }
        }
        _ => println!("Unknown command. Type 'help' for commands."),
    }
    Ok(())
}

fn print_board(session: &mut ChessSession) {
    let perspective = match session.settings().mode {
        GameMode::Ai => Side::from(session.settings().player_color),
        GameMode::Local => Side::White,
    };
    println!();
    print!("{}", session.render_board(perspective));

    let captured = session.captured();
    let advantage = captured.material_advantage();
    if advantage != 0 || !captured.white_captured.is_empty() || !captured.black_captured.is_empty()
    {
        println!(
            "Captured  White: {}  Black: {}  ({:+})",
            captured.symbols(Side::White),
            captured.symbols(Side::Black),
            advantage
        );
    }
    if let Some(message) = session.message() {
        println!("{message}");
    }
    session.clear_message();
    println!("{}", session.status_text());
}

fn print_stats(session: &ChessSession) {
    let stats = session.get_progress();
    println!(
        "Played {}  Won {}  Lost {}  Drawn {}",
        stats.games_played, stats.games_won, stats.games_lost, stats.games_drawn
    );
    println!(
        "Streak {} (best {})  Captures {}  Checkmates {}",
        stats.current_win_streak,
        stats.best_win_streak,
        stats.total_pieces_captured,
        stats.total_checkmates
    );
    for difficulty in Difficulty::ALL {
        println!(
            "  {:<6} {} wins / {} losses",
            difficulty.name(),
            stats.wins_at(difficulty),
            stats.losses_at(difficulty)
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  e2e4, e7e8q        make a move");
    println!("  moves <square>     list legal destinations");
    println!("  promote <q|r|b|n>  finish a promotion");
    println!("  cancel             cancel a promotion");
    println!("  undo               take back your last move");
    println!("  resign             give up this game");
    println!("  new                start a new game");
    println!("  mode <ai|local>    set mode for the next game");
    println!("  difficulty <level> set difficulty for the next game");
    println!("  color <white|black> set your colour for the next game");
    println!("  stats              show your progress");
    println!("  quit               leave");
}
