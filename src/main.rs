//! ShapeSwifter command-line runner (default binary).
//!
//! `puzzle` prints the day's puzzle as JSON; `play` replays a move list
//! through a play session and prints the outcome.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use serde::Serialize;

use shapeswifter::config::AppConfig;
use shapeswifter::core::{
    format_time, generate, generate_detailed, parse_moves, share_text, PlaySession, ScoreResult,
    SessionStatus, ShareCard,
};

/// Daily shape-transformation puzzle.
#[derive(Parser)]
#[command(name = "shapeswifter", about, long_about = None, version)]
struct Cli {
    /// Enable debug messages
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the puzzle for a date as JSON
    Puzzle {
        /// Puzzle date (YYYY-MM-DD), today in UTC when omitted
        #[arg(short, long)]
        date: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long, default_value_t = false)]
        pretty: bool,
    },

    /// Replay a move list against a puzzle
    Play {
        /// Puzzle date (YYYY-MM-DD), today in UTC when omitted
        #[arg(short, long)]
        date: Option<String>,

        /// Comma separated transforms, e.g. rotate_cw,flip_h,morph_up
        #[arg(short, long)]
        moves: String,

        /// Seconds the whole attempt took
        #[arg(short, long, default_value_t = 0)]
        time: u32,

        /// Current streak, shown on the share card
        #[arg(short, long, default_value_t = 1)]
        streak: u32,

        /// Print the outcome as JSON
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayReport {
    puzzle_id: String,
    day_number: i64,
    status: SessionStatus,
    moves_used: u32,
    optimal_moves: u32,
    time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ScoreResult>,
    hints: Vec<String>,
    rejected: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = AppConfig::from_env();
    info!("config: {:?}", config);

    match cli.command {
        Command::Puzzle { date, pretty } => print_puzzle(&date.unwrap_or_else(today), pretty),
        Command::Play {
            date,
            moves,
            time,
            streak,
            json,
        } => play(
            &config,
            &date.unwrap_or_else(today),
            &moves,
            time,
            streak,
            json,
        ),
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

fn print_puzzle(date: &str, pretty: bool) -> Result<()> {
    let puzzle = generate(date).with_context(|| format!("generating puzzle for {date}"))?;
    let out = if pretty {
        serde_json::to_string_pretty(&puzzle)?
    } else {
        serde_json::to_string(&puzzle)?
    };
    println!("{out}");
    Ok(())
}

fn play(
    config: &AppConfig,
    date: &str,
    moves: &str,
    time: u32,
    streak: u32,
    json: bool,
) -> Result<()> {
    let generated =
        generate_detailed(date).with_context(|| format!("generating puzzle for {date}"))?;
    let moves = parse_moves(moves).context("parsing --moves")?;

    let solution: Vec<&str> = generated.path.iter().map(|t| t.as_str()).collect();
    let mut session = PlaySession::new(generated.puzzle, config.rules());
    let rejected: Vec<String> = session
        .replay(&moves, time)
        .into_iter()
        .map(|(transform, err)| format!("{}: {err}", transform.as_str()))
        .collect();

    let puzzle = session.puzzle();
    if json {
        let report = PlayReport {
            puzzle_id: puzzle.id.clone(),
            day_number: puzzle.day_number,
            status: session.status(),
            moves_used: session.moves_used(),
            optimal_moves: puzzle.optimal_moves,
            time: session.elapsed_secs(),
            result: session.result(),
            hints: session.hints().iter().map(ToString::to_string).collect(),
            rejected,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Day #{} ({})", puzzle.day_number, puzzle.id);
    for line in &rejected {
        println!("  rejected {line}");
    }
    println!(
        "Moves: {}/{}  Time: {}",
        session.moves_used(),
        config.max_moves,
        format_time(session.elapsed_secs())
    );

    match (session.status(), session.result()) {
        (SessionStatus::Won, Some(result)) => {
            println!("Solved! {} points, {} stars\n", result.score, result.stars);
            let card = ShareCard {
                day_number: puzzle.day_number,
                stars: result.stars,
                moves: session.moves_used(),
                optimal_moves: puzzle.optimal_moves,
                streak,
                move_history: session.moves(),
            };
            println!("{}", share_text(&card));
        }
        (status, _) => {
            match status {
                SessionStatus::Lost(reason) => println!("Lost: {reason:?}"),
                _ => println!("Not solved yet"),
            }
            let hints: Vec<String> = session.hints().iter().map(ToString::to_string).collect();
            if !hints.is_empty() {
                println!("Hints: {}", hints.join("  "));
            }
        }
    }

    if config.testing {
        println!("Solution: {}", solution.join(","));
    }
    Ok(())
}
