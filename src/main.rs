//! Repairs backtick damage in a chapter-data source file left behind by a
//! faulty global `sed` substitution.
//!
//! Four damage patterns are fixed, per line and in order:
//!
//! 1. **Role unwrap** — `role: '`input`'` → `role: 'input'`
//! 2. **Description strip** — stray backticks inside quoted descriptions
//! 3. **Content wrap** — bare `content:` values regain their template literal
//! 4. **Content escape** — interior backticks of single-line template
//!    literals are escaped
//!
//! Lines inside a well-formed multi-line template literal pass through
//! untouched; the whole file is rewritten in place only after the full
//! transform succeeds.

mod content;
mod description;
mod field;
mod literal;
mod role;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

#[derive(Parser)]
#[command(name = "tickfix", about = "Repair backtick damage in chapter data files")]
struct Cli {
    /// File to repair in place
    #[arg(default_value = "src/data/chapters.ts")]
    file: String,
}

/// Repair one line. Caller guarantees the line is not interior text of an
/// open template literal.
fn repair_line(line: &str) -> String {
    match field::classify(line) {
        Some(field::FieldKind::Role) => role::unwrap_role(line),
        Some(field::FieldKind::Description) => description::strip_backticks(line),
        Some(field::FieldKind::Content) => {
            // Wrap first, then escape — a bare value with inline backticks
            // needs both.
            let wrapped = content::wrap_bare_value(line);
            content::escape_inline_backticks(&wrapped)
        }
        None => line.to_string(),
    }
}

/// Core repair pass — extracted for testability.
fn repair_source(source: &str) -> String {
    let mut fixed = Vec::new();
    let mut in_literal = false;

    for line in source.split('\n') {
        if in_literal {
            // Interior of a multi-line template literal — emit verbatim.
            if literal::toggles_state(line) {
                in_literal = false;
            }
            fixed.push(line.to_string());
            continue;
        }
        let repaired = repair_line(line);
        if literal::toggles_state(&repaired) {
            in_literal = true;
        }
        fixed.push(repaired);
    }

    fixed.join("\n")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file))?;

    let result = repair_source(&source);

    fs::write(&cli.file, &result)
        .with_context(|| format!("Failed to write {}", cli.file))?;

    println!("Fixed {}", cli.file);
    Ok(())
}
