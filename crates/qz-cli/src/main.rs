//! Console front end for the qz quiz runner.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use qz_core::config::{DEFAULT_EXIT_WORD, DEFAULT_EXTENSION};

#[derive(Parser)]
#[command(
    name = "qz",
    about = "qz - multiple-choice quizzes from JSON question banks",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a question bank from a directory and take quizzes until you type the exit word
    Pick {
        /// Directory containing question bank files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// RNG seed for a reproducible question order
        #[arg(short, long)]
        seed: Option<u64>,

        /// Reply that ends the picker loop
        #[arg(long, default_value = DEFAULT_EXIT_WORD)]
        exit_word: String,

        /// Extension of question bank files
        #[arg(long, default_value = DEFAULT_EXTENSION)]
        ext: String,
    },

    /// Take one quiz from a question bank file
    Take {
        /// Question bank file
        file: PathBuf,

        /// RNG seed for a reproducible question order
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Validate a question bank without running it
    Check {
        /// Question bank file
        file: PathBuf,
    },

    /// List question banks in a directory
    List {
        /// Directory containing question bank files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Extension of question bank files
        #[arg(long, default_value = DEFAULT_EXTENSION)]
        ext: String,
    },
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::pick::run(
            &PathBuf::from("."),
            None,
            DEFAULT_EXIT_WORD,
            DEFAULT_EXTENSION,
        ),
        Some(Commands::Pick {
            dir,
            seed,
            exit_word,
            ext,
        }) => commands::pick::run(&dir, seed, &exit_word, &ext),
        Some(Commands::Take { file, seed }) => commands::take::run(&file, seed),
        Some(Commands::Check { file }) => commands::check::run(&file),
        Some(Commands::List { dir, ext }) => commands::list::run(&dir, &ext),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
