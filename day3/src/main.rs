use std::{env, fs};

use anyhow::Context;
use day3::DiagnosticLog;
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

    // All entries share the width of the first one.
    let width = content
        .split_ascii_whitespace()
        .next()
        .map(str::len)
        .context("the diagnostic report is empty")?;
    anyhow::ensure!(
        width <= u32::BITS as usize,
        "entries wider than {} bits are not supported",
        u32::BITS
    );

    let mut log = DiagnosticLog::with_width(width);
    log.load(&content)?;

    match part {
        "1" => {
            let result = log.power_consumption()?;
            println!("{}", result);
        }
        "2" => {
            let result = log.life_support_rating()?;
            println!("{}", result);
        }
        _ => unreachable!("{}", part),
    }

    Ok(())
}
