use anyhow::{Context, Result};
use clap::Parser;
use minesweep_core::{CellPicker, GameConfig, RandomPicker};
use std::io::{self, BufRead, Write};
use tracing_subscriber::filter::LevelFilter;

use command::{Command, HELP, ParseError};
use session::{Click, Session};

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every board update as a JSON document instead of a grid
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Output {
    Grid,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.tracing_level_filter());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let output = if args.json { Output::Json } else { Output::Grid };
    let mut session = Session::new(GameConfig::default(), RandomPicker::from_seed(seed));

    let mut out = io::stdout().lock();
    if output == Output::Grid {
        writeln!(out, "{HELP}\n")?;
    }
    draw(&mut out, &session, output)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read from stdin")?;

        let redraw = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(out, "{HELP}")?;
                false
            }
            Ok(Command::NewGame) => {
                session.new_game();
                true
            }
            Ok(Command::Reveal(coords)) => apply(&mut out, &mut session, coords, Click::Primary)?,
            Ok(Command::Flag(coords)) => apply(&mut out, &mut session, coords, Click::Secondary)?,
            Err(ParseError::Empty) => false,
            Err(err) => {
                writeln!(out, "{err}")?;
                false
            }
        };

        if redraw {
            draw(&mut out, &session, output)?;
        }
    }

    log::debug!("Input closed, exiting");
    Ok(())
}

fn apply<P: CellPicker>(
    out: &mut impl Write,
    session: &mut Session<P>,
    coords: minesweep_core::Coord2,
    click: Click,
) -> io::Result<bool> {
    let was_finished = session.field().is_finished();
    match session.click(coords, click) {
        Ok(redraw) => Ok(redraw),
        Err(err) => {
            let (rows, cols) = session.field().size();
            writeln!(out, "{err}: ({}, {}) is not on the {rows}x{cols} board", coords.0, coords.1)?;
            // the miss still started a new game
            Ok(was_finished)
        }
    }
}

fn draw<P: CellPicker>(out: &mut impl Write, session: &Session<P>, output: Output) -> Result<()> {
    let view = session.view();
    match output {
        Output::Grid => write!(out, "{}", render::Grid(&view))?,
        Output::Json => {
            serde_json::to_writer(&mut *out, &view).context("Could not encode board")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn init_logging(level: LevelFilter) {
    // also bridges `log` records from the core into the subscriber
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
