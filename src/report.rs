//! Plain-text rendering of a computed [`Dashboard`].

use std::fmt::Write;

use colored::Colorize;
use spendwise_domain::{dates, CategorySummary, Dashboard};

/// Controls currency symbol and coloring of rendered reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    pub symbol: String,
    pub color: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            color: false,
        }
    }
}

impl ReportStyle {
    pub fn new(symbol: impl Into<String>, color: bool) -> Self {
        Self {
            symbol: symbol.into(),
            color,
        }
    }

    fn money(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.symbol, -amount)
        } else {
            format!("{}{:.2}", self.symbol, amount)
        }
    }

    fn remaining(&self, amount: f64) -> String {
        let text = self.money(amount);
        match (self.color, amount < 0.0) {
            (false, _) => text,
            (true, true) => text.red().bold().to_string(),
            (true, false) => text.green().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        let line = format!("=== {text} ===");
        if self.color {
            line.bold().to_string()
        } else {
            line
        }
    }
}

/// Renders the dashboard totals, the per-category breakdown, calendar spend
/// and any skipped-record warnings.
pub fn render_dashboard(dashboard: &Dashboard, style: &ReportStyle) -> String {
    let mut out = String::new();
    let title = match dashboard.current_date {
        Some(date) => format!("Dashboard for {}", dates::format_iso(date)),
        None => "Dashboard".to_string(),
    };
    let summary = &dashboard.summary;

    let _ = writeln!(out, "{}", style.heading(&title));
    let _ = writeln!(out, "Total Spent: {}", style.money(summary.total_spent));
    let _ = writeln!(out, "Total Budget: {}", style.money(summary.total_budget));
    let _ = writeln!(
        out,
        "Remaining: {}",
        style.remaining(summary.total_remaining)
    );
    let _ = writeln!(
        out,
        "Active budgets: {}, matched expenses: {}",
        dashboard.active_budgets, dashboard.matched_expenses
    );

    if !summary.per_category.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "By Category:");
        for entry in summary.per_category.values() {
            render_category(&mut out, entry, style);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "This week: {}", style.money(dashboard.spending.week));
    let _ = writeln!(out, "This month: {}", style.money(dashboard.spending.month));

    if !dashboard.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skipped {} record(s):", dashboard.warnings.len());
        for warning in &dashboard.warnings {
            let line = format!("  - {warning}");
            if style.color {
                let _ = writeln!(out, "{}", line.yellow());
            } else {
                let _ = writeln!(out, "{line}");
            }
        }
    }
    out
}

fn render_category(out: &mut String, entry: &CategorySummary, style: &ReportStyle) {
    let marker = if entry.is_over_budget() {
        " (over budget)"
    } else {
        ""
    };
    let _ = writeln!(out, "{}:{}", entry.category, marker);
    let _ = writeln!(out, "  Budgeted: {}", style.money(entry.budgeted));
    let _ = writeln!(out, "  Spent: {}", style.money(entry.spent));
    let _ = writeln!(out, "  Remaining: {}", style.remaining(entry.remaining));
}
