use crate::core::bond::{Bond, Expense};
use crate::core::money::format_won;
use crate::interest::accrual::{period_interest, InterestError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display-ready breakdown of what a bond is worth today.
///
/// Computed from a bond snapshot: the principal, the interest accrued by
/// each complete term, expense line items, and the grand total. Interest
/// for an incomplete term is `None` and must not be rendered.
///
/// Amounts are kept as exact decimals; the `Display` impl floors to
/// whole won for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondBreakdown {
    principal: Decimal,
    first_interest: Option<Decimal>,
    second_interest: Option<Decimal>,
    expenses: Vec<Expense>,
}

impl BondBreakdown {
    /// Compute the breakdown for a bond snapshot.
    ///
    /// # Errors
    ///
    /// Propagates [`InterestError`] when a term carries an inverted date
    /// range or other invalid data.
    pub fn from_bond(bond: &Bond) -> Result<Self, InterestError> {
        let principal = bond.principal();
        Ok(Self {
            principal,
            first_interest: period_interest(principal, bond.first_period())?,
            second_interest: period_interest(principal, bond.second_period())?,
            expenses: bond.expenses().to_vec(),
        })
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    /// Interest accrued by the first term, if that term is complete.
    pub fn first_interest(&self) -> Option<Decimal> {
        self.first_interest
    }

    /// Interest accrued by the second term, if that term is complete.
    pub fn second_interest(&self) -> Option<Decimal> {
        self.second_interest
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Total interest across both terms.
    pub fn interest_total(&self) -> Decimal {
        self.first_interest.unwrap_or(Decimal::ZERO)
            + self.second_interest.unwrap_or(Decimal::ZERO)
    }

    /// Sum of expense line items.
    pub fn expense_total(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Grand total owed: principal + interest + expenses.
    pub fn total(&self) -> Decimal {
        self.principal + self.interest_total() + self.expense_total()
    }
}

impl std::fmt::Display for BondBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Bond Breakdown ===")?;
        writeln!(f, "Principal:  {}", format_won(self.principal))?;
        if let Some(interest) = self.first_interest {
            writeln!(f, "Interest 1: {}", format_won(interest))?;
        }
        if let Some(interest) = self.second_interest {
            writeln!(f, "Interest 2: {}", format_won(interest))?;
        }
        for expense in &self.expenses {
            writeln!(f, "Expense:    {} {}", expense.item, format_won(expense.amount))?;
        }
        writeln!(f, "Total:      {}", format_won(self.total()))?;
        Ok(())
    }
}
