//! Output formatting utilities

use crate::application::{ImportReport, SyncReport};
use crate::domain::Quote;

/// Format a single quote for display
pub fn format_quote(quote: &Quote) -> String {
    format!("\"{}\"\n  — {}", quote.text, quote.category)
}

/// Format the full quote list for display
pub fn format_quote_list(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes found".to_string();
    }

    let mut output = String::new();
    for quote in quotes {
        output.push_str(&format!("[{}]  {}\n", quote.category, quote.text));
    }
    output
}

/// Format the category list for display
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }
    output
}

/// Format an import report
pub fn format_import_report(report: &ImportReport) -> String {
    format!(
        "Imported {} quote(s), skipped {} duplicate(s). Store now holds {}.",
        report.imported, report.duplicates, report.total
    )
}

/// Format a sync report
pub fn format_sync_report(report: &SyncReport) -> String {
    let summary = if report.changed {
        format!(
            "Quotes updated from the server ({} fetched). Store now holds {}.",
            report.fetched, report.total
        )
    } else {
        "Sync complete. No changes.".to_string()
    };

    format!(
        "{}\nLast sync: {}",
        summary,
        report.synced_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
