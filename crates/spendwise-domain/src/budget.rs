use std::fmt;

use chrono::NaiveDate;
use serde::{de::Deserializer, Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::{
    common::{Amounted, Identifiable},
    dates,
    period::{Cadence, Period},
};

/// A spending limit for one category, renewed every period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    /// Anchor of the first period, `yyyy-MM-dd`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            start_date: None,
            frequency: None,
        }
    }

    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Resolves the anchor date and cadence, or explains why the budget can
    /// never be active.
    pub fn schedule(&self) -> Result<Schedule, ScheduleIssue> {
        let raw_start = self
            .start_date
            .as_deref()
            .ok_or(ScheduleIssue::MissingStartDate)?;
        let frequency = self
            .frequency
            .as_ref()
            .ok_or(ScheduleIssue::MissingFrequency)?;
        let cadence = frequency
            .cadence()
            .ok_or_else(|| ScheduleIssue::UnsupportedFrequency(frequency.to_string()))?;
        let anchor = dates::parse_iso_date(raw_start)
            .ok_or_else(|| ScheduleIssue::MalformedStartDate(raw_start.to_string()))?;
        Ok(Schedule { anchor, cadence })
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Budget {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Parsed recurrence of a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub anchor: NaiveDate,
    pub cadence: Cadence,
}

impl Schedule {
    pub fn period_containing(&self, reference: NaiveDate) -> Option<Period> {
        self.cadence.period_containing(self.anchor, reference)
    }
}

/// Reasons a budget is excluded from activity resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleIssue {
    MissingStartDate,
    MissingFrequency,
    UnsupportedFrequency(String),
    MalformedStartDate(String),
}

impl fmt::Display for ScheduleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleIssue::MissingStartDate => f.write_str("no start date"),
            ScheduleIssue::MissingFrequency => f.write_str("no frequency"),
            ScheduleIssue::UnsupportedFrequency(label) => {
                write!(f, "unsupported frequency `{label}`")
            }
            ScheduleIssue::MalformedStartDate(raw) => write!(f, "malformed start date `{raw}`"),
        }
    }
}

/// Recurrence label stored on a budget.
///
/// Labels other than weekly/monthly are preserved verbatim so they round-trip,
/// but such budgets never become active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
    Monthly,
    Unsupported(String),
}

impl Frequency {
    pub fn from_label(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("weekly") {
            Frequency::Weekly
        } else if trimmed.eq_ignore_ascii_case("monthly") {
            Frequency::Monthly
        } else {
            Frequency::Unsupported(trimmed.to_string())
        }
    }

    pub fn cadence(&self) -> Option<Cadence> {
        match self {
            Frequency::Weekly => Some(Cadence::Weekly),
            Frequency::Monthly => Some(Cadence::Monthly),
            Frequency::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Weekly => f.write_str("Weekly"),
            Frequency::Monthly => f.write_str("Monthly"),
            Frequency::Unsupported(label) => f.write_str(label),
        }
    }
}

impl Serialize for Frequency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Frequency::from_label(&value))
    }
}
