use std::path::Path;

use colored::Colorize;

use qz_core::run_picker;

pub fn run(dir: &Path, seed: Option<u64>, exit_word: &str, ext: &str) -> Result<(), String> {
    if !dir.is_dir() {
        return Err(format!("'{}' is not a directory", dir.display()));
    }
    let config = super::config(seed)
        .with_exit_word(exit_word)
        .with_extension(ext);

    println!("  {} question banks in {}", "Quiz".bold(), dir.display());
    println!("  Type '{}' after a quiz to quit.\n", config.exit_word);

    let mut console = super::stdio_console();
    run_picker(dir, &config, &mut console).map_err(|e| format!("console error: {e}"))
}
