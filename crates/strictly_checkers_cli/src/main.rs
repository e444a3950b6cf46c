//! Strictly Checkers - Unified CLI
//!
//! Renders starting positions and replays recorded games through the rule
//! engine.

#![warn(missing_docs)]

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::{CheckersConfig, Opening};
use std::path::Path;
use strictly_checkers::{Game, GameView};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CheckersConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Show { example, json } => run_show(&config, example, json),
        Command::Replay { file, json } => run_replay(&file, json),
    }
}

/// Print a starting position
#[instrument(skip(config))]
fn run_show(config: &CheckersConfig, example: bool, json: bool) -> Result<()> {
    let opening = if example {
        Opening::Example
    } else {
        *config.opening()
    };
    info!(?opening, "Rendering starting position");
    print_game(&opening.new_game(), json)
}

/// Replay a record file and print the resulting position
#[instrument]
fn run_replay(file: &Path, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read record {}", file.display()))?;

    let mut game = Game::new();
    let rounds = game
        .replay_record(&text)
        .with_context(|| format!("Failed to replay {}", file.display()))?;
    info!(rounds, "Replay finished");

    print_game(&game, json)
}

fn print_game(game: &Game, json: bool) -> Result<()> {
    println!("{}", render(game, json)?);
    Ok(())
}

/// Formats a session as text or as a JSON view
fn render(game: &Game, json: bool) -> Result<String> {
    if json {
        return Ok(GameView::from(game).to_json()?);
    }

    let mut out = game.board().display();
    out.push_str(&format!("\n\nTo move: {}", game.to_move()));
    if !game.log().is_empty() {
        out.push_str(&format!("\n\n{}", game.log()));
    }
    if let Some(winner) = game.winner() {
        out.push_str(&format!("\n\nWinner: {}", winner));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_after_replay() {
        let mut game = Game::new();
        game.replay_record("1. c3-d4 f6-e5").unwrap();
        let text = render(&game, false).unwrap();
        assert!(text.starts_with("8 "));
        assert!(text.contains("To move: white"));
        assert!(text.ends_with("1. c3-d4 f6-e5"));
    }

    #[test]
    fn test_render_json_uses_view() {
        let game = Opening::Example.new_game();
        let json = render(&game, true).unwrap();
        assert_eq!(json, GameView::from(&game).to_json().unwrap());
        assert!(json.contains("\"to_move\": \"white\""));
    }
}
