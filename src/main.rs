use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_engine::ai::{Agent, RandomAgent};
use connect_four_engine::config::{AppConfig, Controller};
use connect_four_engine::game::{Connect4Engine, GameResult, Player};
use connect_four_engine::logging;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four on a 7x6 board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Who plays red
    #[arg(long, value_enum)]
    red: Option<Controller>,

    /// Who plays green
    #[arg(long, value_enum)]
    green: Option<Controller>,

    /// Seed for the random players
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play (random vs random only)
    #[arg(long)]
    games: Option<usize>,
}

/// One side of the table.
enum Seat {
    Human,
    Agent(Box<dyn Agent>),
}

impl Seat {
    fn new(controller: Controller, seed: Option<u64>) -> Self {
        match controller {
            Controller::Human => Seat::Human,
            Controller::Random => Seat::Agent(Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            })),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let log_handle = logging::init();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(red) = cli.red {
        config.game.red = red;
    }
    if let Some(green) = cli.green {
        config.game.green = green;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if let Some(games) = cli.games {
        config.game.games = games;
    }
    config.validate().context("invalid settings")?;

    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        logging::set_level(&log_handle, &config.logging.level)
            .context("applying configured log level")?;
    }

    let mut red = Seat::new(config.game.red, config.game.seed);
    let mut green = Seat::new(config.game.green, config.game.seed.map(|s| s.wrapping_add(1)));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut tally = Tally::default();

    for game in 1..=config.game.games {
        if config.game.games > 1 {
            println!("Game {game}");
        }
        let result = play_game(&mut red, &mut green, &mut input)?;
        match result {
            GameResult::Won(player) => println!("{} wins", player.name()),
            GameResult::Draw => println!("Draw"),
            GameResult::InProgress => bail!("game ended while still in progress"),
        }
        tally.record(result);
    }

    if config.game.games > 1 {
        println!(
            "Red: {}  Green: {}  Draws: {}",
            tally.red, tally.green, tally.draws
        );
    }

    Ok(())
}

fn play_game(red: &mut Seat, green: &mut Seat, input: &mut impl BufRead) -> Result<GameResult> {
    let mut engine = Connect4Engine::new(io::stdout());

    while !engine.is_finished() {
        let player = engine.announce_turn();
        let seat = match player {
            Player::Red => &mut *red,
            Player::Green => &mut *green,
        };

        let column = match seat {
            Seat::Agent(agent) => agent.select_action(engine.state()) as i64,
            Seat::Human => read_column(input)?,
        };

        // Illegal moves leave the turn with the same player
        if let Err(e) = engine.insert_disc(column) {
            println!("{e}");
        }
    }

    Ok(engine.result())
}

/// Prompt until the player types a column number (1-7).
fn read_column(input: &mut impl BufRead) -> Result<i64> {
    loop {
        print!("Column (1-7): ");
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("reading move")? == 0 {
            bail!("input closed before the game finished");
        }
        match line.trim().parse::<i64>() {
            Ok(n) => return Ok(n.saturating_sub(1)),
            Err(_) => println!("'{}' is not a column number", line.trim()),
        }
    }
}

#[derive(Default)]
struct Tally {
    red: usize,
    green: usize,
    draws: usize,
}

impl Tally {
    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Won(Player::Red) => self.red += 1,
            GameResult::Won(Player::Green) => self.green += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_column_is_zero_based() {
        let mut input = Cursor::new("1\n");
        assert_eq!(read_column(&mut input).unwrap(), 0);

        let mut input = Cursor::new("  7 \n");
        assert_eq!(read_column(&mut input).unwrap(), 6);
    }

    #[test]
    fn test_read_column_reprompts_on_garbage() {
        let mut input = Cursor::new("left\n\n4\n5\n");
        assert_eq!(read_column(&mut input).unwrap(), 3);
        // Only the lines up to the first number are consumed
        assert_eq!(read_column(&mut input).unwrap(), 4);
    }

    #[test]
    fn test_read_column_passes_out_of_range_through() {
        // The engine, not the prompt, rejects columns off the board
        let mut input = Cursor::new("0\n-3\n");
        assert_eq!(read_column(&mut input).unwrap(), -1);
        assert_eq!(read_column(&mut input).unwrap(), -4);
    }

    #[test]
    fn test_read_column_fails_on_closed_input() {
        let mut input = Cursor::new("");
        assert!(read_column(&mut input).is_err());

        let mut input = Cursor::new("abc\n");
        let err = read_column(&mut input).unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn test_tally_counts_results() {
        let mut tally = Tally::default();
        tally.record(GameResult::Won(Player::Red));
        tally.record(GameResult::Won(Player::Green));
        tally.record(GameResult::Won(Player::Green));
        tally.record(GameResult::Draw);
        assert_eq!((tally.red, tally.green, tally.draws), (1, 2, 1));
    }
}
