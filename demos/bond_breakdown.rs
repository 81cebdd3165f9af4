//! Compute and print a bond's interest breakdown.
//!
//! Run with: `cargo run --example bond_breakdown`

use chrono::NaiveDate;
use recovery_engine::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    let bond = Bond::new(dec!(50_000_000))
        .with_first_period(InterestPeriod::new(
            dec!(5),
            NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        ))
        .with_second_period(InterestPeriod::new(
            dec!(12),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
        ))
        .with_expense("인지대", dec!(230_000))
        .with_expense("송달료", dec!(104_400));

    match BondBreakdown::from_bond(&bond) {
        Ok(breakdown) => print!("{}", breakdown),
        Err(e) => eprintln!("invalid bond: {}", e),
    }
}
