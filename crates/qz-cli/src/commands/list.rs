use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use qz_core::QuestionBank;
use qz_core::picker::{bank_name, list_banks};

pub fn run(dir: &Path, ext: &str) -> Result<(), String> {
    let banks = list_banks(dir, ext.trim_start_matches('.'))
        .map_err(|e| format!("cannot read {}: {e}", dir.display()))?;

    if banks.is_empty() {
        println!("  No question banks found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "File", "Questions"]);

    for (i, path) in banks.iter().enumerate() {
        let status = match QuestionBank::load(path) {
            Ok(bank) => bank.len().to_string(),
            Err(e) => format!("invalid: {e}"),
        };
        table.add_row(vec![i.to_string(), bank_name(path), status]);
    }

    println!("{table}");
    println!();
    println!("  {} banks", banks.len());

    Ok(())
}
