//! Terminal output rendering for diff reports.

use super::schema::{DiffOutcome, DiffReport};
use colored::*;

/// Render a human-readable summary of a diff report for the terminal
///
/// Only the first `top_n` ranked results are listed.
pub fn render_terminal_report(report: &DiffReport, top_n: usize) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_results(report, top_n));
    out.push_str(&render_status(report, top_n));

    out
}

fn render_header(report: &DiffReport) -> String {
    let mut out = String::new();
    out.push_str("\n📊 ");
    out.push_str(&"Overweight Symbol Report".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!(
        "Source:   {} [{}] {:.2}ms\n",
        report.source.capture, report.source.process, report.source.total_exclusive
    ));
    out.push_str(&format!(
        "Baseline: {} [{}] {:.2}ms\n",
        report.baseline.capture, report.baseline.process, report.baseline.total_exclusive
    ));
    out.push_str(&format!(
        "{} Total delta: {:+.2}ms",
        get_delta_symbol(report.total_delta),
        report.total_delta
    ));
    if let Some(growth) = report.growth {
        out.push_str(&format!(" (growth x{:.4})", growth));
    }
    out.push_str("\n---------------------------------------------------\n\n");
    out
}

fn render_results(report: &DiffReport, top_n: usize) -> String {
    let mut out = String::new();
    for result in report.results.iter().take(top_n) {
        out.push_str(&result.to_string());
        out.push('\n');
    }
    out
}

fn render_status(report: &DiffReport, top_n: usize) -> String {
    let mut out = String::new();
    out.push_str("\n---------------------------------------------------\n");
    let status_msg = match report.summary.outcome {
        DiffOutcome::DifferencesFound => format!(
            "🔎 Showing {} of {} common symbols",
            report.results.len().min(top_n),
            report.summary.result_count
        )
        .green()
        .bold(),
        other => format!("ℹ️  {}", other.description()).yellow().bold(),
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');
    out
}

fn get_delta_symbol(change: f64) -> &'static str {
    if change > 0.0 {
        "📈"
    } else if change < 0.0 {
        "📉"
    } else {
        "➡️"
    }
}
