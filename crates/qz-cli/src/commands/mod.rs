pub mod check;
pub mod list;
pub mod pick;
pub mod take;

use std::io::{self, StdinLock, Stdout};

use qz_core::{Console, QuizConfig};

/// Console over the process's stdin and stdout.
fn stdio_console() -> Console<StdinLock<'static>, Stdout> {
    Console::new(io::stdin().lock(), io::stdout())
}

/// Build a config from the shared command-line options.
fn config(seed: Option<u64>) -> QuizConfig {
    match seed {
        Some(seed) => QuizConfig::default().with_seed(seed),
        None => QuizConfig::default(),
    }
}
