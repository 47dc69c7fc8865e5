//! Recurring budget periods and calendar windows.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::DomainError;

const DAYS_PER_WEEK: i64 = 7;

/// A half-open `[start, end)` range of calendar days. Never empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "PeriodBounds")]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct PeriodBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<PeriodBounds> for Period {
    type Error = DomainError;

    fn try_from(bounds: PeriodBounds) -> Result<Self, Self::Error> {
        Period::new(bounds.start, bounds.end)
    }
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day after the period.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Last day that still belongs to the period.
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.start)
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.last_day())
    }
}

/// Supported budget recurrence cadences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Cadence {
    /// Contiguous seven-day windows anchored at the budget start date.
    Weekly,
    /// Calendar months, beginning with the month of the budget start date.
    Monthly,
}

impl Cadence {
    /// Returns the period instance that contains `reference`, or `None` when
    /// `reference` precedes the first period anchored at `anchor`.
    ///
    /// Computed in closed form; equivalent to stepping one period at a time
    /// from the anchor until the reference date is reached.
    pub fn period_containing(self, anchor: NaiveDate, reference: NaiveDate) -> Option<Period> {
        match self {
            Cadence::Weekly => {
                let elapsed = (reference - anchor).num_days();
                if elapsed < 0 {
                    return None;
                }
                let index = elapsed.div_euclid(DAYS_PER_WEEK);
                week_starting(anchor.checked_add_signed(Duration::days(index * DAYS_PER_WEEK))?)
            }
            Cadence::Monthly => {
                if month_index(reference) < month_index(anchor) {
                    return None;
                }
                month_at(month_index(reference))
            }
        }
    }

    /// Returns the `index`-th period (zero based) counted from `anchor`.
    pub fn period_at(self, anchor: NaiveDate, index: u32) -> Option<Period> {
        match self {
            Cadence::Weekly => {
                let offset = Duration::days(i64::from(index) * DAYS_PER_WEEK);
                week_starting(anchor.checked_add_signed(offset)?)
            }
            Cadence::Monthly => {
                let index = i32::try_from(index).ok()?;
                month_at(month_index(anchor).checked_add(index)?)
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Cadence::Weekly => "Weekly",
            Cadence::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Monday-based calendar week containing `date`.
pub fn calendar_week(date: NaiveDate) -> Option<Period> {
    let delta = i64::from(date.weekday().num_days_from_monday());
    week_starting(date.checked_sub_signed(Duration::days(delta))?)
}

/// Calendar month containing `date`.
pub fn calendar_month(date: NaiveDate) -> Option<Period> {
    month_at(month_index(date))
}

fn week_starting(start: NaiveDate) -> Option<Period> {
    let end = start.checked_add_signed(Duration::days(DAYS_PER_WEEK))?;
    Some(Period { start, end })
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

fn first_of_month(index: i32) -> Option<NaiveDate> {
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn month_at(index: i32) -> Option<Period> {
    Some(Period {
        start: first_of_month(index)?,
        end: first_of_month(index.checked_add(1)?)?,
    })
}
