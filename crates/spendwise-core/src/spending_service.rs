//! Calendar-window spend totals, independent of budgets.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use spendwise_domain::{
    calendar_month, calendar_week, total_amount, Expense, ExpenseCategory, Period,
    SpendingSnapshot,
};

pub struct SpendingService;

impl SpendingService {
    /// Sum of expenses dated inside `period`. Unparseable dates are ignored.
    pub fn total_between(expenses: &[Expense], period: Period) -> f64 {
        total_amount(Self::within(expenses, move |date| period.contains(date)))
    }

    pub fn totals_by_category_between(
        expenses: &[Expense],
        period: Period,
    ) -> BTreeMap<ExpenseCategory, f64> {
        let mut totals = BTreeMap::new();
        for expense in Self::within(expenses, move |date| period.contains(date)) {
            *totals.entry(expense.category).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Spend so far in the Monday-based week and the calendar month containing
    /// `current_date`. Expenses after `current_date` are not counted.
    pub fn snapshot(expenses: &[Expense], current_date: NaiveDate) -> SpendingSnapshot {
        let to_date = |period: Option<Period>| {
            period.map_or(0.0, |period| {
                total_amount(Self::within(expenses, move |date| {
                    period.contains(date) && date <= current_date
                }))
            })
        };
        SpendingSnapshot {
            week: to_date(calendar_week(current_date)),
            month: to_date(calendar_month(current_date)),
        }
    }

    fn within<'a, F>(expenses: &'a [Expense], keep: F) -> impl Iterator<Item = &'a Expense>
    where
        F: Fn(NaiveDate) -> bool + 'a,
    {
        expenses.iter().filter(move |expense| {
            expense
                .parsed_date()
                .is_some_and(|date| keep(date))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expenses() -> Vec<Expense> {
        vec![
            Expense::new("Groceries", ExpenseCategory::Food, 40.0, "2024-03-04"),
            Expense::new("Bus", ExpenseCategory::Transport, 2.5, "03/06/2024"),
            Expense::new("Dinner", ExpenseCategory::Food, 30.0, "2024-03-09"),
            Expense::new("Rent", ExpenseCategory::Bills, 900.0, "2024-03-01"),
            Expense::new("Pharmacy", ExpenseCategory::Health, 12.0, "2024-02-28"),
            Expense::new("Typo", ExpenseCategory::Other, 99.0, "2024-3-x"),
        ]
    }

    #[test]
    fn totals_between_use_half_open_periods() {
        let period = Period::new(ymd(2024, 3, 1), ymd(2024, 3, 9)).unwrap();
        let total = SpendingService::total_between(&expenses(), period);
        assert!((total - 942.5).abs() < 1e-9);
    }

    #[test]
    fn totals_by_category_group_amounts() {
        let march = calendar_month(ymd(2024, 3, 15)).unwrap();
        let totals = SpendingService::totals_by_category_between(&expenses(), march);
        assert_eq!(totals.get(&ExpenseCategory::Food), Some(&70.0));
        assert_eq!(totals.get(&ExpenseCategory::Bills), Some(&900.0));
        assert_eq!(totals.get(&ExpenseCategory::Health), None);
        assert_eq!(totals.get(&ExpenseCategory::Other), None);
    }

    #[test]
    fn snapshot_counts_only_days_up_to_current_date() {
        // Wednesday 2024-03-06: week runs from Monday 2024-03-04.
        let snapshot = SpendingService::snapshot(&expenses(), ymd(2024, 3, 6));
        assert!((snapshot.week - 42.5).abs() < 1e-9);
        assert!((snapshot.month - 942.5).abs() < 1e-9);
    }
}
