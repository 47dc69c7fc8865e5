//! Sample records for first-run data sources.

use chrono::{Duration, NaiveDate};

use spendwise_domain::{
    calendar_month, calendar_week, dates::format_iso, Budget, Expense, ExpenseCategory, Frequency,
};

/// Records written into a data source that holds none yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    pub budgets: Vec<Budget>,
    pub expenses: Vec<Expense>,
}

impl SeedData {
    /// A small household example anchored on the week and month of `today`.
    pub fn sample(today: NaiveDate) -> Self {
        let month_start = calendar_month(today).map_or(today, |period| period.start());
        let week_start = calendar_week(today).map_or(today, |period| period.start());
        let yesterday = today
            .checked_sub_signed(Duration::days(1))
            .filter(|day| *day >= month_start)
            .unwrap_or(today);
        let month_day = format_iso(month_start);
        let week_day = format_iso(week_start);
        let day_before = format_iso(yesterday);

        let budgets = vec![
            Budget::new(ExpenseCategory::Food.display_name(), 400.0)
                .with_start_date(month_day.clone())
                .with_frequency(Frequency::Monthly),
            Budget::new(ExpenseCategory::Transport.display_name(), 60.0)
                .with_start_date(week_day.clone())
                .with_frequency(Frequency::Weekly),
            Budget::new(ExpenseCategory::Entertainment.display_name(), 120.0)
                .with_start_date(month_day.clone())
                .with_frequency(Frequency::Monthly),
            Budget::new(ExpenseCategory::Bills.display_name(), 1_200.0)
                .with_start_date(month_day.clone())
                .with_frequency(Frequency::Monthly),
        ];

        let expenses = vec![
            Expense::new("Groceries", ExpenseCategory::Food, 82.4, month_day.clone()),
            Expense::new("Bus pass", ExpenseCategory::Transport, 25.0, week_day),
            Expense::new(
                "Movie night",
                ExpenseCategory::Entertainment,
                18.0,
                day_before,
            ),
            Expense::new("Electricity", ExpenseCategory::Bills, 96.3, month_day)
                .with_notes("monthly utility"),
            Expense::new("Lunch", ExpenseCategory::Food, 12.5, format_iso(today)),
        ];

        Self { budgets, expenses }
    }
}
