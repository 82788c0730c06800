//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use console::style;

use crate::boundary::IngestWarning;
use crate::domain::{BranchDirection, Highlight, ReleaseAggregate};
use crate::scene::{LegendEntry, LegendSymbol};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal ingestion warning.
pub fn display_ingest_warning(warning: &IngestWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display ingestion warnings, collapsing long lists.
///
/// Shows at most `limit` warnings followed by a count of the rest.
pub fn display_ingest_warnings(warnings: &[IngestWarning], limit: usize) {
    for warning in warnings.iter().take(limit) {
        display_ingest_warning(warning);
    }

    if warnings.len() > limit {
        eprintln!(
            "{} ... and {} more warnings",
            style("⚠").yellow(),
            warnings.len() - limit
        );
    }
}

fn direction_arrow(direction: BranchDirection) -> &'static str {
    match direction {
        BranchDirection::Left => "←",
        BranchDirection::Right => "→",
    }
}

/// One summary line for a release, without styling.
///
/// Example: `v42.0     ←  y=2.5   +4 ~1 -1  blossom`
pub fn format_release_row(aggregate: &ReleaseAggregate) -> String {
    format!(
        "{:<10} {}  y={:<5} +{} ~{} -{}  {}",
        aggregate.release.label(),
        direction_arrow(aggregate.direction),
        aggregate.vertical_position,
        aggregate.positive(),
        aggregate.neutral(),
        aggregate.negative(),
        aggregate.highlight
    )
}

/// Display the release tree summary, one line per branch.
pub fn display_release_summary(title: &str, aggregates: &[ReleaseAggregate]) {
    println!("\n{}", style(title).bold());

    if aggregates.is_empty() {
        println!("  (no reviews)");
        return;
    }

    // Top branch first, as the tree reads
    for aggregate in aggregates.iter().rev() {
        let row = format_release_row(aggregate);
        let row = match aggregate.highlight {
            Highlight::Positive => style(row).magenta(),
            Highlight::Negative => style(row).red(),
            Highlight::None => style(row),
        };
        println!("  {}", row);
    }
}

/// Display release identifiers in processing order.
pub fn display_release_list(aggregates: &[ReleaseAggregate]) {
    println!("{}", style("Releases:").bold());
    for aggregate in aggregates {
        println!("  - {} ({} reviews)", aggregate.release, aggregate.total());
    }
}

fn legend_glyph(entry: &LegendEntry) -> String {
    let glyph = match entry.symbol {
        LegendSymbol::Circle => "●",
        LegendSymbol::Star => "*",
        LegendSymbol::Cross => "x",
    };
    match entry.color {
        "green" => style(glyph).green().to_string(),
        "orange" => style(glyph).yellow().to_string(),
        "red" => style(glyph).red().to_string(),
        "pink" => style(glyph).magenta().to_string(),
        "brown" => style(glyph).color256(94).to_string(),
        _ => glyph.to_string(),
    }
}

/// Display the colour legend.
pub fn display_legend(entries: &[LegendEntry]) {
    println!("\n{}", style("Legend:").underlined());
    for entry in entries {
        println!("  {} {}", legend_glyph(entry), entry.label);
    }
}
