//! Derived reporting structures. Rebuilt from scratch on every computation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Budgeted vs. spent totals for a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl CategorySummary {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            budgeted: 0.0,
            spent: 0.0,
            remaining: 0.0,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Aggregated totals for the active budgets and their matched expenses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_spent: f64,
    pub total_budget: f64,
    pub total_remaining: f64,
    /// Keyed by category display name.
    pub per_category: BTreeMap<String, CategorySummary>,
}

/// Spend inside the calendar week and month containing the current date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendingSnapshot {
    pub week: f64,
    pub month: f64,
}

/// Everything the dashboard shows for one current date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// `None` when the requested current date could not be parsed.
    pub current_date: Option<NaiveDate>,
    pub summary: BudgetSummary,
    pub spending: SpendingSnapshot,
    pub active_budgets: usize,
    pub matched_expenses: usize,
    /// Records skipped during the computation, one note per record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Dashboard {
    pub fn empty(current_date: Option<NaiveDate>) -> Self {
        Self {
            current_date,
            ..Self::default()
        }
    }
}
