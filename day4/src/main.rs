use std::{env, fs};

use anyhow::Context;
use day4::Game;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut reversed_args: Vec<_> = args.iter().map(|x| x.as_str()).rev().collect();

    reversed_args
        .pop()
        .context("Expected the executable name to be the first argument, but was missing")?;

    let part = reversed_args.pop().context("part number")?;
    let input_file = reversed_args.pop().context("input file")?;
    let content = fs::read_to_string(input_file)
        .with_context(|| format!("failed to read {}", input_file))?;

    let mut game = Game::new();
    game.load(&content)?;

    match part {
        "1" => {
            let result = game.play_to_win().score().context("no board ever wins, or the score overflows")?;
            println!("{}", result);
        }
        "2" => {
            let result = game.play_to_lose().score().context("not every board wins, or the score overflows")?;
            println!("{}", result);
        }
        _ => unreachable!("{}", part),
    }

    Ok(())
}
