use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four_rules::config::AppConfig;
use connect_four_rules::game::{Game, GameOutcome, Piece, Side};
use connect_four_rules::rules::WinCheckAlgorithm;

/// Play a sequence of Connect Four moves and report the result.
#[derive(Parser)]
#[command(name = "connect-four", about = "Replay Connect Four moves and detect the winner")]
struct Cli {
    /// Columns to drop pieces into, sides alternate starting with the configured first side
    moves: Vec<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override the run length needed to win
    #[arg(long)]
    connect: Option<usize>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print a configuration file with all default values and exit
    #[arg(long)]
    print_default_config: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    moves_played: usize,
    next_side: Side,
    outcome: Option<GameOutcome>,
    winning_axis: Option<WinCheckAlgorithm>,
    last_piece: Option<&'a Piece>,
    board: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(connect) = cli.connect {
        config.board.connections_required = connect;
    }
    let mut game = Game::from_config(&config).context("creating board")?;
    info!(
        width = config.board.width,
        height = config.board.height,
        connect = config.board.connections_required,
        "game started"
    );

    let mut winning_axis = None;
    for (turn, &column) in cli.moves.iter().enumerate() {
        let side = game.current_side();
        let result = game
            .play(side, column)
            .with_context(|| format!("move {} ({} into column {column})", turn + 1, side.name()))?;
        winning_axis = result.winning_axis;
    }

    if cli.json {
        let report = Report {
            moves_played: game.move_count(),
            next_side: game.current_side(),
            outcome: game.outcome(),
            winning_axis,
            last_piece: game.last_piece(),
            board: game.board().to_string().lines().map(str::to_owned).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", game.board());
    match game.outcome() {
        Some(GameOutcome::Winner(side)) => {
            let axis = winning_axis.map_or("unknown", WinCheckAlgorithm::name);
            println!("{} wins ({axis})", side.name());
        }
        Some(GameOutcome::Draw) => println!("Draw"),
        None => println!("{} to move", game.current_side().name()),
    }

    Ok(())
}
