//! Random portfolio generation.
//!
//! Produces synthetic assignment snapshots for CLI demos, benches and
//! stress-style tests.

use crate::core::assignment::{Assignment, AssignmentKind, AssignmentStatus};
use crate::core::bond::{Bond, InterestPeriod};
use crate::core::enforcement::{Enforcement, EnforcementStatus};
use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating a random portfolio.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Number of assignments to generate.
    pub assignment_count: usize,
    /// Maximum bond principal in won.
    pub max_principal: Decimal,
    /// Maximum enforcements per assignment.
    pub max_enforcements: usize,
    /// Anchor date; periods and enforcements fall in the year before it.
    pub as_of: NaiveDate,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            assignment_count: 20,
            max_principal: Decimal::from(100_000_000),
            max_enforcements: 4,
            as_of: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        }
    }
}

/// Generate a random portfolio of assignments for testing.
pub fn generate_random_portfolio(config: &PortfolioConfig) -> Vec<Assignment> {
    let mut rng = rand::thread_rng();
    let mut assignments = Vec::with_capacity(config.assignment_count);

    let max_principal: i64 = config
        .max_principal
        .to_string()
        .parse()
        .unwrap_or(100_000_000);

    for _ in 0..config.assignment_count {
        let status = if rng.gen_bool(0.3) {
            AssignmentStatus::Closed
        } else {
            AssignmentStatus::Ongoing
        };
        let kind = if rng.gen_bool(0.7) {
            AssignmentKind::Collection
        } else {
            AssignmentKind::Litigation
        };

        let mut assignment = Assignment::new(status, kind);

        let principal = Decimal::from(rng.gen_range(1_000_000..max_principal.max(1_000_001)));
        let period_days = rng.gen_range(30..365);
        let start = config.as_of - Duration::days(period_days);
        let mut bond = Bond::new(principal).with_first_period(InterestPeriod::new(
            Decimal::from(rng.gen_range(3..15)),
            start,
            config.as_of,
        ));
        if rng.gen_bool(0.3) {
            bond = bond.with_expense("송달료", Decimal::from(rng.gen_range(10_000..100_000)));
        }
        assignment = assignment.with_bond(bond);

        for _ in 0..rng.gen_range(0..=config.max_enforcements) {
            let days_back = rng.gen_range(0..365);
            let date = config.as_of - Duration::days(days_back);
            let created_at = Utc
                .with_ymd_and_hms(date.year(), date.month(), date.day(), 10, 0, 0)
                .unwrap();
            let enforcement_status = if rng.gen_bool(0.6) {
                EnforcementStatus::Closed
            } else {
                EnforcementStatus::Ongoing
            };
            assignment = assignment.with_enforcement(Enforcement::new(
                enforcement_status,
                Decimal::from(rng.gen_range(100_000..10_000_000)),
                "추심",
                created_at,
            ));
        }

        assignments.push(assignment);
    }

    assignments
}
