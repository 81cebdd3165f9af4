use crate::core::enforcement::Enforcement;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One calendar month of recovered funds.
///
/// `year` disambiguates months across a year boundary; the display
/// label carries only the month, Korean-style ("1월").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
}

impl MonthlyBucket {
    /// Chart label for this bucket, e.g. `"3월"`.
    pub fn label(&self) -> String {
        format!("{}월", self.month)
    }
}

/// Sum closed-enforcement amounts per calendar month over the trailing
/// `months`-month window ending at (and including) the month of `as_of`.
///
/// Returns exactly `months` buckets, oldest first. Enforcements are
/// attributed by the year and month of their `created_at` (UTC calendar
/// date), so a window spanning December→January keeps the two Januaries
/// apart. Enforcements whose status is not `closed` are ignored.
///
/// `as_of` is an injected clock: callers pass "today" explicitly, which
/// keeps the function deterministic under test.
///
/// # Examples
///
/// ```
/// use recovery_engine::analytics::trend::monthly_recovery;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
/// let buckets = monthly_recovery(&[], as_of, 4);
/// let labels: Vec<String> = buckets.iter().map(|b| b.label()).collect();
/// assert_eq!(labels, vec!["11월", "12월", "1월", "2월"]);
/// ```
pub fn monthly_recovery(
    enforcements: &[Enforcement],
    as_of: NaiveDate,
    months: usize,
) -> Vec<MonthlyBucket> {
    let mut buckets: Vec<MonthlyBucket> = (0..months)
        .rev()
        .map(|back| {
            let (year, month) = shift_month(as_of.year(), as_of.month(), back as i32);
            MonthlyBucket {
                year,
                month,
                amount: Decimal::ZERO,
            }
        })
        .collect();

    for enforcement in enforcements {
        if !enforcement.is_recovered() {
            continue;
        }
        let date = enforcement.created_at().date_naive();
        if let Some(bucket) = buckets
            .iter_mut()
            .find(|b| b.year == date.year() && b.month == date.month())
        {
            bucket.amount += enforcement.amount();
        }
    }

    buckets
}

/// The calendar month `back` months before `(year, month)`.
fn shift_month(year: i32, month: u32, back: i32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) - back;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}
