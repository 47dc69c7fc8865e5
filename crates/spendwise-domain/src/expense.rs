use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    category::ExpenseCategory,
    common::{Amounted, Identifiable},
    dates, DomainError,
};

/// A single logged expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    /// `yyyy-MM-dd` or `MM/dd/yyyy`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        category: ExpenseCategory,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            amount,
            date: date.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds an expense from raw form input.
    ///
    /// The name must be non-blank, the amount a finite non-negative number and
    /// the category one of [`ExpenseCategory::ALL`]. Blank notes are dropped.
    pub fn from_input(
        name: &str,
        amount_text: &str,
        category: &str,
        date: NaiveDate,
        notes: Option<&str>,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("expense name is required".into()));
        }
        let amount: f64 = amount_text.trim().parse().map_err(|_| {
            DomainError::Validation(format!("amount `{amount_text}` is not a number"))
        })?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::Validation(format!(
                "amount must be a non-negative number, got {amount_text}"
            )));
        }
        let category = category.parse()?;
        let mut expense = Expense::new(name, category, amount, dates::format_iso(date));
        expense.notes = notes
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);
        Ok(expense)
    }

    /// Parsed calendar date, `None` when the stored text is not in an
    /// accepted layout.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        dates::parse_expense_date(&self.date)
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}
