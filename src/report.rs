//! Per-file console reporting

use console::Style;

use crate::stamper::FileOutcome;

/// Print one status line for a processed file.
pub fn print_outcome(file: &str, outcome: &FileOutcome, token: i64) {
    match outcome {
        FileOutcome::Updated { css, js } => {
            println!(
                "{} {}: updated {} CSS and {} JS links to v={}",
                Style::new().green().apply_to("✓"),
                Style::new().bold().apply_to(file),
                css,
                js,
                token
            );
        }
        FileOutcome::NoMatches => {
            println!(
                "{} {}: no local links found to update",
                Style::new().dim().apply_to("·"),
                Style::new().bold().apply_to(file)
            );
        }
        FileOutcome::Missing => {
            println!(
                "{} {}: not found, skipped",
                Style::new().yellow().apply_to("⚠"),
                Style::new().bold().apply_to(file)
            );
        }
    }
}
