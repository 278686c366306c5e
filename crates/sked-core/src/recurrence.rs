//! Date recurrence engine.
//!
//! Pure calendar arithmetic: given a reference date, a start date and a
//! rule, compute the first occurrence strictly after the reference. No I/O,
//! no shared state, identical inputs always give identical outputs.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::RuleError;
use crate::models::Rule;

/// Computes the next due date strictly after `reference`, starting from
/// `start` and stepping by `repeat`.
///
/// `repeat` is the wire form of the rule (`"y"` or `"d:N"`); the empty rule
/// is not a valid input here and fails with [`RuleError::Empty`] — callers
/// holding a one-off task must branch before calling. Parsing happens before
/// any date arithmetic, so `d:400` fails without looping.
///
/// The step is always applied at least once: if `start` is already past
/// `reference`, the result is `start` plus one step, not `start` itself.
pub fn next_due_date(
    reference: NaiveDate,
    start: NaiveDate,
    repeat: &str,
) -> Result<NaiveDate, RuleError> {
    let rule: Rule = repeat.parse()?;
    Ok(rule.next_after(reference, start))
}

impl Rule {
    /// Typed form of [`next_due_date`] for callers that already hold a
    /// parsed rule. Infallible: a `Rule` that exists is in range.
    pub fn next_after(self, reference: NaiveDate, start: NaiveDate) -> NaiveDate {
        let mut date = start;
        loop {
            date = self.step(date);
            if date > reference {
                return date;
            }
        }
    }

    fn step(self, date: NaiveDate) -> NaiveDate {
        match self {
            Rule::Yearly => add_year(date),
            Rule::EveryDays(n) => date + Days::new(u64::from(n)),
        }
    }
}

/// Adds one calendar year, preserving month and day.
///
/// When the day does not exist in the target year the date spills into the
/// following month: Feb 29 plus one year lands on Mar 1. This is intentional
/// and matches the normalizing calendar convention the original scheduler
/// relied on; recurrence timing for leap-day tasks depends on it.
fn add_year(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).unwrap_or_else(|| {
        let first = NaiveDate::from_ymd_opt(year, date.month(), 1)
            .expect("the first of a real month exists in every year");
        first + Days::new(u64::from(date.day()) - 1)
    })
}
