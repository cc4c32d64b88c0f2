use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, Write};
use treecmp::{compare, demo};

#[derive(Parser)]
#[command(name = "treecmp")]
#[command(about = "Compare an AVL tree with an unbalanced binary search tree")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Time insert, search and remove on sorted and random keys
    Compare {
        /// Numbers of keys to test with
        #[arg(
            long,
            value_delimiter = ',',
            value_parser = compare::parse_size,
            default_values_t = compare::DEFAULT_SIZES.to_vec()
        )]
        sizes: Vec<usize>,

        /// Seed for the random keys; drawn from entropy if absent
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Walk through AVL tree operations
    AvlDemo,
    /// Walk through BST operations
    BstDemo,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Compare { sizes, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            writeln!(out, "=== Tree Performance Comparison ===")?;
            for size in sizes {
                let report = compare::compare(size, &mut rng);
                writeln!(out, "\n{}", report)?;
            }
            writeln!(out, "\n=== Test Completed ===")?;
        }
        Command::AvlDemo => demo::avl_demo(&mut out)?,
        Command::BstDemo => demo::bst_demo(&mut out)?,
    }

    Ok(())
}
