//! Aggregates active budgets and matched expenses into dashboard totals.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use spendwise_domain::{dates, Budget, BudgetSummary, CategorySummary, Dashboard, Expense};

use crate::{
    activity_service::ActivityService, period_service::PeriodService,
    spending_service::SpendingService,
};

/// Stateless summary utilities that operate over budget and expense snapshots.
pub struct SummaryService;

impl SummaryService {
    /// Sums budgets and expenses overall and per category.
    ///
    /// Every category present in either input gets an entry; `remaining` is
    /// always `budgeted - spent`, for the totals and for each category.
    pub fn aggregate<'a, B, E>(active_budgets: B, matched_expenses: E) -> BudgetSummary
    where
        B: IntoIterator<Item = &'a Budget>,
        E: IntoIterator<Item = &'a Expense>,
    {
        let mut per_category: BTreeMap<String, CategorySummary> = BTreeMap::new();
        let mut total_budget = 0.0;
        let mut total_spent = 0.0;

        for budget in active_budgets {
            total_budget += budget.amount;
            per_category
                .entry(budget.category.clone())
                .or_insert_with(|| CategorySummary::new(budget.category.as_str()))
                .budgeted += budget.amount;
        }

        for expense in matched_expenses {
            let category = expense.category.display_name();
            total_spent += expense.amount;
            per_category
                .entry(category.to_string())
                .or_insert_with(|| CategorySummary::new(category))
                .spent += expense.amount;
        }

        for summary in per_category.values_mut() {
            summary.remaining = summary.budgeted - summary.spent;
        }

        BudgetSummary {
            total_spent,
            total_budget,
            total_remaining: total_budget - total_spent,
            per_category,
        }
    }

    /// Runs the full compute stage: activity resolution, period matching,
    /// aggregation and calendar spending totals.
    pub fn dashboard(
        current_date: NaiveDate,
        budgets: &[Budget],
        expenses: &[Expense],
    ) -> Dashboard {
        let mut warnings = Vec::new();
        let active = ActivityService::resolve_active_noting(budgets, current_date, &mut warnings);
        let matched =
            PeriodService::matched_expenses_noting(expenses, &active, current_date, &mut warnings);
        let summary = Self::aggregate(
            active.iter().map(|entry| entry.budget),
            matched.iter().copied(),
        );
        debug!(
            %current_date,
            active = active.len(),
            matched = matched.len(),
            skipped = warnings.len(),
            "dashboard computed"
        );
        Dashboard {
            current_date: Some(current_date),
            summary,
            spending: SpendingService::snapshot(expenses, current_date),
            active_budgets: active.len(),
            matched_expenses: matched.len(),
            warnings,
        }
    }

    /// Same as [`SummaryService::dashboard`] for a textual `yyyy-MM-dd` date.
    /// An unparseable date yields an empty dashboard carrying a warning.
    pub fn dashboard_for_text(
        current_date: &str,
        budgets: &[Budget],
        expenses: &[Expense],
    ) -> Dashboard {
        match dates::parse_iso_date(current_date) {
            Some(date) => Self::dashboard(date, budgets, expenses),
            None => {
                warn!(current_date, "current date is not a yyyy-MM-dd date");
                let note = format!("current date `{current_date}` is not a yyyy-MM-dd date");
                let mut dashboard = Dashboard::empty(None);
                dashboard.warnings.push(note);
                dashboard
            }
        }
    }
}
