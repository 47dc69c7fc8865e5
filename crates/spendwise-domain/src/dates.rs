//! Textual calendar date parsing.
//!
//! Dates arrive as free text from the storage layer. Each accepted layout is a
//! [`DateFormat`]; parsers try an ordered list of formats and return the first
//! successful result, never an error.

use chrono::NaiveDate;

/// A textual layout a calendar date may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `yyyy-MM-dd`
    Iso,
    /// `MM/dd/yyyy`
    UsSlash,
}

impl DateFormat {
    pub const fn pattern(self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::UsSlash => "%m/%d/%Y",
        }
    }

    pub fn parse(self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), self.pattern()).ok()
    }
}

/// Layouts accepted for budget start dates and the current date.
pub const ISO_ONLY: &[DateFormat] = &[DateFormat::Iso];

/// Layouts accepted for expense dates, ISO first.
pub const EXPENSE_DATE_FORMATS: &[DateFormat] = &[DateFormat::Iso, DateFormat::UsSlash];

/// Tries each format in order and returns the first date that parses.
pub fn parse_with(formats: &[DateFormat], text: &str) -> Option<NaiveDate> {
    formats.iter().find_map(|format| format.parse(text))
}

pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    parse_with(ISO_ONLY, text)
}

pub fn parse_expense_date(text: &str) -> Option<NaiveDate> {
    parse_with(EXPENSE_DATE_FORMATS, text)
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(DateFormat::Iso.pattern()).to_string()
}
