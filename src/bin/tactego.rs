//! Two players, one terminal.
//!
//! Asks for a seed, a piece file and the board size, then alternates turns
//! on stdin/stdout until a Flag falls.

use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{bail, Context, Result};

use tactego::console::{ConsoleObserver, ConsoleSource};
use tactego::core::GameConfig;
use tactego::game::GameSession;
use tactego::pieces::PieceTable;

fn ask(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended while waiting for: {}", prompt.trim());
    }
    Ok(line.trim().to_string())
}

/// Numeric seeds are used as-is; anything else is hashed.
fn seed_from(text: &str) -> u64 {
    text.parse().unwrap_or_else(|_| {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    })
}

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let seed = seed_from(&ask(&mut input, &mut output, "What is the seed? ")?);
    let path = ask(&mut input, &mut output, "What is the filename for the pieces? ")?;
    let length: usize = ask(&mut input, &mut output, "What is the length? ")?
        .parse()
        .context("length must be a non-negative integer")?;
    let width: usize = ask(&mut input, &mut output, "What is the width? ")?
        .parse()
        .context("width must be a non-negative integer")?;

    let file = File::open(&path).with_context(|| format!("cannot open piece file `{}`", path))?;
    let table = PieceTable::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot load piece file `{}`", path))?;

    let config = GameConfig::new(length, width).with_seed(seed);
    let mut session = GameSession::new(&config, &table).context("cannot set up the board")?;

    let mut observer = ConsoleObserver::new(io::stdout());
    observer.show(session.board())?;

    let mut source = ConsoleSource::new(input, output);
    session.play(&mut source, &mut observer)?;
    Ok(())
}
