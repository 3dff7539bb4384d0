use std::path::Path;

use colored::Colorize;

use qz_core::QuestionBank;

pub fn run(file: &Path) -> Result<(), String> {
    let bank = QuestionBank::load(file).map_err(|e| e.to_string())?;

    let answers: usize = bank.questions().iter().map(|q| q.answers.len()).sum();
    println!(
        "  {} {}: {} question{}, {} answers",
        "OK".green().bold(),
        file.display(),
        bank.len(),
        if bank.len() == 1 { "" } else { "s" },
        answers,
    );
    Ok(())
}
