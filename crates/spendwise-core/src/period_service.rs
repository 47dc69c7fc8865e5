//! Matches expenses against the current period of active budgets.

use chrono::NaiveDate;
use tracing::debug;

use spendwise_domain::{Budget, Expense};

use crate::activity_service::{ActiveBudget, ActivityService};

pub struct PeriodService;

impl PeriodService {
    /// Whether `expense` falls in the period of `budget` that contains `current_date`.
    ///
    /// Callers pair expenses and budgets of the same category and drop
    /// expenses dated after `current_date` beforehand.
    pub fn is_in_current_period(
        expense: &Expense,
        budget: &Budget,
        current_date: NaiveDate,
    ) -> bool {
        let Some(period) = ActivityService::current_period(budget, current_date) else {
            return false;
        };
        expense
            .parsed_date()
            .is_some_and(|date| period.contains(date))
    }

    /// Expenses that land in the current period of an active budget of the same
    /// category. Each expense is returned at most once, in input order.
    pub fn matched_expenses<'a>(
        expenses: &'a [Expense],
        active: &[ActiveBudget<'_>],
        current_date: NaiveDate,
    ) -> Vec<&'a Expense> {
        let mut warnings = Vec::new();
        Self::matched_expenses_noting(expenses, active, current_date, &mut warnings)
    }

    pub fn matched_expenses_noting<'a>(
        expenses: &'a [Expense],
        active: &[ActiveBudget<'_>],
        current_date: NaiveDate,
        warnings: &mut Vec<String>,
    ) -> Vec<&'a Expense> {
        expenses
            .iter()
            .filter(|expense| {
                let Some(date) = expense.parsed_date() else {
                    debug!(expense = %expense.id, date = %expense.date, "unparseable expense date");
                    warnings.push(format!(
                        "expense {} ({}) skipped: unparseable date `{}`",
                        expense.id, expense.name, expense.date
                    ));
                    return false;
                };
                if date > current_date {
                    return false;
                }
                let category = expense.category.display_name();
                active
                    .iter()
                    .any(|entry| entry.budget.category == category && entry.period.contains(date))
            })
            .collect()
    }
}
