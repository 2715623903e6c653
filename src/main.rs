//! # finalstate CLI
//!
//! A command-line tool around the final-state record writers.
//!
//! ## Usage
//!
//! ```bash
//! # Write 10 mock events through the plain hadrons writer
//! finalstate demo hadrons_run.dat
//!
//! # Gzip-compressed partons output with a settings file
//! finalstate demo partons_run.dat.gz --writer final_state_partons_gz --config writer.toml
//!
//! # Show the registered writer names
//! finalstate list
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

/// finalstate - Final-State Particle Record Writer
#[derive(Parser)]
#[command(name = "finalstate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a deterministic mock event stream through a registered writer
    Demo {
        /// Output file path
        #[arg(value_name = "OUTPUT", default_value = "final_state_hadrons.dat")]
        output: PathBuf,

        /// Registered writer name (see `finalstate list`)
        #[arg(short, long, default_value = "final_state_hadrons")]
        writer: String,

        /// Number of events to generate
        #[arg(short, long, default_value = "10")]
        events: u64,

        /// Optional TOML file with writer settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the registered writer names
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Demo {
            output,
            writer,
            events,
            config,
        } => cli::demo::run(output, &writer, events, config),
        Commands::List => {
            for registration in finalstate::registry::WRITERS {
                println!("{}", registration.name);
            }
            Ok(())
        }
    }
}
