use crate::core::bond::InterestPeriod;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors arising from interest accrual over an invalid input.
#[derive(Debug, Error, PartialEq)]
pub enum InterestError {
    #[error("principal must be non-negative, got {principal}")]
    NegativePrincipal { principal: Decimal },
    #[error("rate must be non-negative, got {rate}%")]
    NegativeRate { rate: Decimal },
    #[error("interest period end {end} is before start {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}

/// Days in the accrual year. Simple interest uses a fixed 365-day
/// denominator regardless of leap years.
const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Simple (non-compounding) interest accrued on `principal` at an annual
/// `rate_percent` over `[start, end)`.
///
/// Day count is inclusive of the start date and exclusive of the end
/// date: `days = end − start`. A zero-length period accrues exactly zero.
///
/// `interest = principal × (rate / 100) × (days / 365)`
///
/// The result carries fractional won; callers floor when displaying
/// currency (see [`crate::core::money::floor_to_won`]).
///
/// # Examples
///
/// ```
/// use recovery_engine::interest::accrual::accrued_interest;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let interest = accrued_interest(dec!(1_000_000), dec!(5), start, end).unwrap();
/// assert_eq!(interest.floor(), dec!(50_000)); // 365 days at 5%
/// ```
///
/// # Errors
///
/// Returns [`InterestError::InvalidPeriod`] when `end < start` — a
/// data-entry error that must be surfaced, not silently zeroed.
pub fn accrued_interest(
    principal: Decimal,
    rate_percent: Decimal,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Decimal, InterestError> {
    if principal < Decimal::ZERO {
        return Err(InterestError::NegativePrincipal { principal });
    }
    if rate_percent < Decimal::ZERO {
        return Err(InterestError::NegativeRate { rate: rate_percent });
    }
    let days = (end - start).num_days();
    if days < 0 {
        return Err(InterestError::InvalidPeriod { start, end });
    }
    Ok(principal * (rate_percent / HUNDRED) * (Decimal::from(days) / DAYS_PER_YEAR))
}

/// Interest contributed by one term of a bond.
///
/// An incomplete period (missing rate, start, or end) contributes
/// nothing and yields `Ok(None)`; it is not an error, and the caller
/// must also exclude it from display.
pub fn period_interest(
    principal: Decimal,
    period: &InterestPeriod,
) -> Result<Option<Decimal>, InterestError> {
    match period.resolve() {
        Some((rate, start, end)) => accrued_interest(principal, rate, start, end).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_year_at_five_percent() {
        // 2024 is a leap year, so Jan 1 → Jan 1 spans 366 days and the
        // 365-denominator convention accrues slightly over 50,000.
        let interest =
            accrued_interest(dec!(1_000_000), dec!(5), date(2024, 1, 1), date(2025, 1, 1))
                .unwrap();
        assert!(interest > dec!(50_000));
        assert!(interest < dec!(50_200));
        assert_eq!(interest.floor(), dec!(50_136));
    }

    #[test]
    fn test_exact_365_days() {
        let interest =
            accrued_interest(dec!(1_000_000), dec!(5), date(2023, 1, 1), date(2024, 1, 1))
                .unwrap();
        assert_eq!(interest, dec!(50_000));
    }

    #[test]
    fn test_zero_length_period_accrues_nothing() {
        let d = date(2024, 6, 15);
        assert_eq!(
            accrued_interest(dec!(7_000_000), dec!(12), d, d).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_zero_principal_accrues_nothing() {
        let interest =
            accrued_interest(Decimal::ZERO, dec!(20), date(2024, 1, 1), date(2024, 7, 1))
                .unwrap();
        assert_eq!(interest, Decimal::ZERO);
    }

    #[test]
    fn test_inverted_period_is_an_error() {
        let result =
            accrued_interest(dec!(1_000_000), dec!(5), date(2024, 6, 1), date(2024, 1, 1));
        assert_eq!(
            result,
            Err(InterestError::InvalidPeriod {
                start: date(2024, 6, 1),
                end: date(2024, 1, 1),
            })
        );
    }

    #[test]
    fn test_negative_principal_is_an_error() {
        let result = accrued_interest(dec!(-1), dec!(5), date(2024, 1, 1), date(2024, 2, 1));
        assert!(matches!(
            result,
            Err(InterestError::NegativePrincipal { .. })
        ));
    }

    #[test]
    fn test_incomplete_period_contributes_none() {
        let period = InterestPeriod {
            rate: Some(dec!(5)),
            start_date: None,
            end_date: Some(date(2024, 3, 1)),
        };
        assert_eq!(period_interest(dec!(1_000_000), &period).unwrap(), None);
    }

    #[test]
    fn test_complete_period_contributes_interest() {
        let period = InterestPeriod::new(dec!(5), date(2023, 1, 1), date(2024, 1, 1));
        assert_eq!(
            period_interest(dec!(1_000_000), &period).unwrap(),
            Some(dec!(50_000))
        );
    }

    #[test]
    fn test_fractional_year() {
        // 73 days is exactly a fifth of a year: 1,000,000 at 10% accrues 20,000.
        let interest =
            accrued_interest(dec!(1_000_000), dec!(10), date(2023, 1, 1), date(2023, 3, 15))
                .unwrap();
        assert_eq!(interest, dec!(20_000));
    }
}
