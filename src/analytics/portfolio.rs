use crate::core::assignment::Assignment;
use crate::core::money::format_won;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level recovery statistics derived from assignment snapshots.
///
/// Pure aggregation: principal comes from each assignment's first bond
/// (zero when the case has no bond), collections count only `closed`
/// enforcements. Assignments with missing nested data simply contribute
/// zeros — partial records are never fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    total_count: usize,
    completed_count: usize,
    total_principal: Decimal,
    total_collected: Decimal,
}

impl PortfolioSummary {
    /// Aggregate a snapshot of assignments.
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        let mut total_principal = Decimal::ZERO;
        let mut total_collected = Decimal::ZERO;
        let mut completed_count = 0usize;

        for assignment in assignments {
            if assignment.is_closed() {
                completed_count += 1;
            }
            total_principal += assignment.principal();
            total_collected += assignment.recovered();
        }

        Self {
            total_count: assignments.len(),
            completed_count,
            total_principal,
            total_collected,
        }
    }

    /// Number of assignments in the snapshot.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Assignments whose status is `closed`.
    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    /// Sum of each assignment's first bond's principal.
    pub fn total_principal(&self) -> Decimal {
        self.total_principal
    }

    /// Sum of closed enforcement amounts across the portfolio.
    pub fn total_collected(&self) -> Decimal {
        self.total_collected
    }

    /// Collected as a percentage of principal, unclamped.
    ///
    /// Over-recovery above 100% is valid data. Zero when the portfolio
    /// carries no principal.
    pub fn average_recovery_rate(&self) -> Decimal {
        if self.total_principal == Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.total_collected * Decimal::from(100) / self.total_principal
    }

    /// Recovery rate as f64 for chart display.
    pub fn recovery_rate_percent(&self) -> f64 {
        self.average_recovery_rate()
            .to_string()
            .parse::<f64>()
            .unwrap_or(0.0)
    }
}

impl std::fmt::Display for PortfolioSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Portfolio Summary ===")?;
        writeln!(f, "Assignments:     {}", self.total_count)?;
        writeln!(f, "Completed:       {}", self.completed_count)?;
        writeln!(f, "Total Principal: {}", format_won(self.total_principal))?;
        writeln!(f, "Total Collected: {}", format_won(self.total_collected))?;
        writeln!(f, "Recovery Rate:   {:.1}%", self.recovery_rate_percent())?;
        Ok(())
    }
}
