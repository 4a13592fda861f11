//! dicebox - dice roller for tabletop sessions

use std::io::{self, BufRead};

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dicebox::command;
use dicebox::dice::{self, DieSource, RollOptions};

/// Tabletop dice roller
#[derive(Parser, Debug)]
#[command(name = "dicebox", version, about = "Parse and roll dice notation")]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Roll a dice notation and print the result
    Roll {
        /// Dice notation, e.g. "1d20+5" or "4d6-1"
        notation: String,

        /// Roll two d20s and keep the higher (1d20 only)
        #[arg(long)]
        advantage: bool,

        /// Roll two d20s and keep the lower (1d20 only)
        #[arg(long)]
        disadvantage: bool,

        /// Seed the RNG for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read chat commands (/roll, /help) from stdin
    Repl {
        /// Seed the RNG for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dicebox=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    match args.command {
        Cmd::Roll {
            notation,
            advantage,
            disadvantage,
            seed,
            json,
        } => {
            let options = RollOptions {
                advantage,
                disadvantage,
            };
            let result = match seed {
                Some(seed) => dice::resolve(&notation, options, &mut StdRng::seed_from_u64(seed))?,
                None => dice::roll(&notation, options)?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.breakdown);
                if result.critical {
                    println!("Critical!");
                } else if result.fumble {
                    println!("Fumble!");
                }
            }
        }
        Cmd::Repl { seed } => match seed {
            Some(seed) => repl(&mut StdRng::seed_from_u64(seed))?,
            None => repl(&mut rand::rng())?,
        },
    }

    Ok(())
}

/// Read chat lines from stdin and print replies until EOF or /quit
fn repl(dice: &mut impl DieSource) -> Result<()> {
    println!("dicebox repl. /help for commands, /quit to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line == "/quit" || line == "quit" {
            break;
        }
        println!("{}", command::dispatch(line, dice));
    }

    Ok(())
}
