use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One date-bounded interest term of a bond.
///
/// Case staff enter these incrementally, so any field may be missing.
/// A period only participates in interest totals when `rate`,
/// `start_date`, and `end_date` are all present; an incomplete period
/// contributes nothing and is excluded from display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestPeriod {
    /// Annual rate in percent (5 means 5%/year).
    #[serde(default)]
    pub rate: Option<Decimal>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl InterestPeriod {
    /// A fully specified period.
    pub fn new(rate: Decimal, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            rate: Some(rate),
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    /// A period with no fields entered yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether all of rate, start and end are present.
    pub fn is_complete(&self) -> bool {
        self.rate.is_some() && self.start_date.is_some() && self.end_date.is_some()
    }

    /// The `(rate, start, end)` triple, if the period is complete.
    pub fn resolve(&self) -> Option<(Decimal, NaiveDate, NaiveDate)> {
        match (self.rate, self.start_date, self.end_date) {
            (Some(rate), Some(start), Some(end)) => Some((rate, start, end)),
            _ => None,
        }
    }
}

/// A cost item charged to the case alongside the debt itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub item: String,
    pub amount: Decimal,
}

impl Expense {
    pub fn new(item: impl Into<String>, amount: Decimal) -> Self {
        Self {
            item: item.into(),
            amount,
        }
    }
}

/// The debt instrument attached to an assignment.
///
/// Carries the principal, up to two interest terms, and expense line
/// items. Bonds are immutable snapshots read from the case-management
/// backend.
///
/// Interest periods may overlap; each is an independently entered term
/// of the instrument and is validated on its own.
///
/// # Examples
///
/// ```
/// use recovery_engine::core::bond::{Bond, InterestPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let bond = Bond::new(dec!(10_000_000)).with_first_period(InterestPeriod::new(
///     dec!(5),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
/// ));
/// assert_eq!(bond.principal(), dec!(10_000_000));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bond {
    /// The original debt amount before interest. Must be non-negative.
    principal: Decimal,
    /// First interest term.
    #[serde(default)]
    first_period: InterestPeriod,
    /// Second interest term (e.g. post-judgment statutory rate).
    #[serde(default)]
    second_period: InterestPeriod,
    /// Expense line items.
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl Bond {
    /// Create a bond with the given principal and no interest terms.
    ///
    /// # Panics
    ///
    /// Panics if `principal` is negative.
    pub fn new(principal: Decimal) -> Self {
        assert!(
            principal >= Decimal::ZERO,
            "Bond principal must be non-negative, got {}",
            principal
        );
        Self {
            principal,
            first_period: InterestPeriod::empty(),
            second_period: InterestPeriod::empty(),
            expenses: Vec::new(),
        }
    }

    /// Set the first interest term.
    pub fn with_first_period(mut self, period: InterestPeriod) -> Self {
        self.first_period = period;
        self
    }

    /// Set the second interest term.
    pub fn with_second_period(mut self, period: InterestPeriod) -> Self {
        self.second_period = period;
        self
    }

    /// Add an expense line item.
    pub fn with_expense(mut self, item: impl Into<String>, amount: Decimal) -> Self {
        self.expenses.push(Expense::new(item, amount));
        self
    }

    // --- Accessors ---

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn first_period(&self) -> &InterestPeriod {
        &self.first_period
    }

    pub fn second_period(&self) -> &InterestPeriod {
        &self.second_period
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of all expense amounts.
    pub fn expense_total(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}
