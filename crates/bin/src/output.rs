//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty JSON followed by a summary line
    Human,
    /// Compact JSON only
    Json,
}

/// Print a result document, with `summary` below it in human format.
pub fn print_document<T: Serialize>(
    value: &T,
    summary: &str,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => {
            println!("{}", serde_json::to_string_pretty(value)?);
            if !summary.is_empty() {
                println!("{summary}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    println!("{}", line(headers.iter().map(|h| h.to_string()).collect()));
    for row in rows {
        println!("{}", line(row.iter().take(col_count).cloned().collect()));
    }
}

/// Plural suffix for counts in summary lines.
pub fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
