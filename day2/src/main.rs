use std::{env, fs};

use anyhow::Context;
use day2::{net_aiming, net_direction, parse_directions, Direction};
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

    let input_data: Vec<Direction> = parse_directions(&content)?;

    match part {
        "1" => {
            let result = solve_part1(&input_data);
            println!("{}", result);
        }
        "2" => {
            let result = solve_part2(&input_data);
            println!("{}", result);
        }
        _ => unreachable!("{}", part),
    }

    Ok(())
}

fn solve_part1(data: &[Direction]) -> i64 {
    let position = net_direction(data.iter().copied());
    tracing::debug!(%position, "final position");

    i64::from(position.x) * i64::from(position.y)
}

fn solve_part2(data: &[Direction]) -> i64 {
    let position = net_aiming(data.iter().copied());
    tracing::debug!(%position, "final position with aiming");

    i64::from(position.x) * i64::from(position.y)
}
