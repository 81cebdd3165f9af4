//! Aggregate a small hand-built portfolio and print the summary and trend.
//!
//! Run with: `cargo run --example portfolio_summary`

use chrono::{NaiveDate, TimeZone, Utc};
use recovery_engine::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    let case1 = Assignment::new(AssignmentStatus::Closed, AssignmentKind::Collection)
        .with_bond(Bond::new(dec!(20_000_000)))
        .with_enforcement(Enforcement::new(
            EnforcementStatus::Closed,
            dec!(15_000_000),
            "추심",
            Utc.with_ymd_and_hms(2024, 3, 12, 10, 0, 0).unwrap(),
        ));

    let case2 = Assignment::new(AssignmentStatus::Ongoing, AssignmentKind::Collection)
        .with_bond(Bond::new(dec!(35_000_000)))
        .with_enforcement(Enforcement::new(
            EnforcementStatus::Closed,
            dec!(4_000_000),
            "압류",
            Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap(),
        ))
        .with_enforcement(Enforcement::new(
            EnforcementStatus::Ongoing,
            dec!(6_000_000),
            "경매",
            Utc.with_ymd_and_hms(2024, 6, 20, 10, 0, 0).unwrap(),
        ));

    let assignments = vec![case1, case2];

    let summary = PortfolioSummary::from_assignments(&assignments);
    println!("{}", summary);

    let enforcements: Vec<Enforcement> = assignments
        .iter()
        .flat_map(|a| a.enforcements().iter().cloned())
        .collect();
    let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    println!("=== Monthly Recovery (6 months) ===");
    for bucket in monthly_recovery(&enforcements, as_of, 6) {
        println!("{:>4}: {}", bucket.label(), bucket.amount);
    }
}
