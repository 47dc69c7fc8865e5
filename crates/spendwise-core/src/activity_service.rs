//! Decides which budgets are active on the current date.

use chrono::NaiveDate;
use tracing::debug;

use spendwise_domain::{Budget, Period};

/// A budget paired with the period instance that contains the current date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveBudget<'a> {
    pub budget: &'a Budget,
    pub period: Period,
}

/// Stateless activity resolution over budget snapshots.
pub struct ActivityService;

impl ActivityService {
    /// Returns the budgets with a period containing `current_date`, in input order.
    pub fn resolve_active(budgets: &[Budget], current_date: NaiveDate) -> Vec<ActiveBudget<'_>> {
        let mut warnings = Vec::new();
        Self::resolve_active_noting(budgets, current_date, &mut warnings)
    }

    /// Like [`ActivityService::resolve_active`], appending a note for every
    /// budget that can never be active (missing or malformed schedule).
    pub fn resolve_active_noting<'a>(
        budgets: &'a [Budget],
        current_date: NaiveDate,
        warnings: &mut Vec<String>,
    ) -> Vec<ActiveBudget<'a>> {
        budgets
            .iter()
            .filter_map(|budget| {
                let schedule = match budget.schedule() {
                    Ok(schedule) => schedule,
                    Err(issue) => {
                        debug!(
                            budget = %budget.id,
                            category = %budget.category,
                            %issue,
                            "budget skipped during activity resolution"
                        );
                        warnings.push(format!(
                            "budget {} ({}) skipped: {}",
                            budget.id, budget.category, issue
                        ));
                        return None;
                    }
                };
                schedule
                    .period_containing(current_date)
                    .map(|period| ActiveBudget { budget, period })
            })
            .collect()
    }

    /// The period of `budget` that contains `current_date`, if the budget is active.
    pub fn current_period(budget: &Budget, current_date: NaiveDate) -> Option<Period> {
        budget.schedule().ok()?.period_containing(current_date)
    }

    pub fn is_active(budget: &Budget, current_date: NaiveDate) -> bool {
        Self::current_period(budget, current_date).is_some()
    }
}
