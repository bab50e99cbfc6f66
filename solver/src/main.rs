use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use vault::{Grid, Limits, Outcome, Solver};

/// Fewest total steps for every agent in a vault to collect all keys.
#[derive(Debug, Parser)]
struct Args {
    /// Maze file, read from stdin when omitted
    input: Option<PathBuf>,
    /// Replace the single entrance with four, one per quadrant
    #[arg(long)]
    split: bool,
    /// Give up after expanding this many search states
    #[arg(long)]
    max_states: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read maze from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read maze from stdin")?;
            buf
        }
    };

    let mut grid = Grid::parse(&input).context("Malformed maze")?;
    if args.split {
        grid = grid.split_entrance().context("Failed to split entrance")?;
    }
    let (h, w) = grid.dim();
    info!("maze is {}x{}", h, w);

    let solver = Solver::new(&grid)
        .context("Malformed maze")?
        .with_limits(Limits {
            max_states: args.max_states,
        });
    let outcome = solver.solve()?;
    if let Outcome::Solved(steps) = outcome {
        info!(
            "{} agent(s) collect {} key(s) in {} steps",
            solver.points().agent_count(),
            solver.points().key_count(),
            steps
        );
    }
    println!("{}", outcome);
    Ok(())
}
