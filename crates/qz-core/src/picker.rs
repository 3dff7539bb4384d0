//! Bank picker: the outer loop that chooses a bank file and runs sessions.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::bank::QuestionBank;
use crate::config::QuizConfig;
use crate::console::{Console, run_session};
use crate::session::{QuizSession, parse_selection};

/// What the picker does after a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Offer the bank list again.
    Continue,
    /// Leave the picker.
    Exit,
}

impl Decision {
    /// Decide from the operator's reply. End of input exits.
    pub fn from_reply(reply: Option<&str>, exit_word: &str) -> Self {
        match reply {
            Some(line) if line != exit_word => Self::Continue,
            _ => Self::Exit,
        }
    }
}

/// List bank files in `dir` with the given extension, sorted by name.
pub fn list_banks(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut banks: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!("skipping unreadable entry in {}: {e}", dir.display());
                None
            }
        })
        .filter(|e| e.file_type().is_ok_and(|t| t.is_file()))
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == extension))
        .collect();
    banks.sort();
    Ok(banks)
}

/// Display name for a bank path.
pub fn bank_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run the picker loop over the banks in `dir` until the operator exits.
pub fn run_picker<R: BufRead, W: Write>(
    dir: &Path,
    config: &QuizConfig,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let mut rng = config.rng();

    loop {
        let banks = list_banks(dir, &config.extension)?;
        if banks.is_empty() {
            writeln!(
                console.out(),
                "no question banks (*.{}) found in {}",
                config.extension,
                dir.display()
            )?;
            return Ok(());
        }

        for (i, path) in banks.iter().enumerate() {
            writeln!(console.out(), "{i} {}", bank_name(path))?;
        }

        let Some(choice) = choose(console, banks.len())? else {
            return Ok(());
        };
        let path = &banks[choice];
        writeln!(console.out(), "opening: {}\n\n", bank_name(path))?;

        match QuestionBank::load(path) {
            Ok(bank) => {
                let card = run_session(QuizSession::new(&bank, &mut rng), console)?;
                info!("{}: {card}", bank_name(path));
            }
            Err(e) => writeln!(console.out(), "{e}")?,
        }

        let reply = console.prompt(&format!("\n\ntype {} to quit:", config.exit_word))?;
        match Decision::from_reply(reply.as_deref(), &config.exit_word) {
            Decision::Exit => return Ok(()),
            Decision::Continue => writeln!(console.out(), "\n\n")?,
        }
    }
}

/// Ask for a bank index until a valid one arrives. `None` at end of input.
fn choose<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    count: usize,
) -> io::Result<Option<usize>> {
    loop {
        let Some(line) = console.prompt("Please choose a file by its index: ")? else {
            return Ok(None);
        };
        match parse_selection(&line, count) {
            Ok(i) => return Ok(Some(i)),
            Err(e) => {
                warn!("bad bank selection {line:?}: {e}");
                writeln!(console.out(), "invalid selection: {e}")?;
            }
        }
    }
}
