use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, RuleError};

/// Canonical textual date form used at every boundary (storage, CLI, JSON).
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Parses a date in the canonical `YYYYMMDD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| CoreError::InvalidDate(s.to_string()))
}

/// Renders a date in the canonical `YYYYMMDD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A recurrence rule. The empty wire form ("one-off task") is represented as
/// `Option<Rule>::None`, so an engine caller can never hand the engine an
/// empty rule by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `y`: the same month and day, next year.
    Yearly,
    /// `d:N`: every `N` days, `1..=399`.
    EveryDays(u16),
}

impl Rule {
    /// Largest accepted `d:N` interval. Anything above is rejected at parse
    /// time, before any date arithmetic runs.
    pub const MAX_DAY_INTERVAL: u64 = 399;

    /// Parses the stored rule column, where the empty string means one-off.
    pub fn parse_opt(s: &str) -> Result<Option<Rule>, RuleError> {
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RuleError::Empty);
        }
        if s == "y" {
            return Ok(Rule::Yearly);
        }
        if let Some(interval) = s.strip_prefix("d:") {
            let n: u64 = interval
                .parse()
                .map_err(|_| RuleError::InvalidInterval(interval.to_string()))?;
            if n == 0 || n > Self::MAX_DAY_INTERVAL {
                return Err(RuleError::IntervalOutOfRange(n));
            }
            return Ok(Rule::EveryDays(n as u16));
        }
        Err(RuleError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Yearly => write!(f, "y"),
            Rule::EveryDays(n) => write!(f, "d:{}", n),
        }
    }
}

/// The scheduled unit. `date` is always the next due date, never a
/// historical one once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    #[serde(with = "date_string")]
    pub date: NaiveDate,
    pub title: String,
    pub comment: String,
    #[serde(with = "repeat_string")]
    pub repeat: Option<Rule>,
}

/// Data for creating a task (and for full-record updates, which share the
/// same validation and overdue-date policy).
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub comment: String,
    /// Requested due date; `None` means "today".
    pub date: Option<NaiveDate>,
    pub repeat: Option<Rule>,
}

/// Outcome of completing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// One-off task, removed from the store.
    Finished,
    /// Recurring task, due date advanced to the returned date.
    Rescheduled(NaiveDate),
}

mod date_string {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(de)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(D::Error::custom)
    }
}

mod repeat_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::Rule;

    pub fn serialize<S: Serializer>(repeat: &Option<Rule>, ser: S) -> Result<S::Ok, S::Error> {
        match repeat {
            Some(rule) => ser.serialize_str(&rule.to_string()),
            None => ser.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Rule>, D::Error> {
        let s = String::deserialize(de)?;
        Rule::parse_opt(&s).map_err(D::Error::custom)
    }
}
