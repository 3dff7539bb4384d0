use std::path::Path;

use colored::Colorize;

use qz_core::picker::bank_name;
use qz_core::{QuestionBank, QuizSession, run_session};

pub fn run(file: &Path, seed: Option<u64>) -> Result<(), String> {
    let bank = QuestionBank::load(file).map_err(|e| e.to_string())?;
    let mut rng = super::config(seed).rng();

    println!(
        "  {} {} ({} questions)\n",
        "Opening".bold(),
        bank_name(file),
        bank.len()
    );

    let mut console = super::stdio_console();
    run_session(QuizSession::new(&bank, &mut rng), &mut console)
        .map_err(|e| format!("console error: {e}"))?;
    Ok(())
}
