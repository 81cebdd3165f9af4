use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use recovery_engine::analytics::portfolio::PortfolioSummary;
use recovery_engine::analytics::trend::monthly_recovery;
use recovery_engine::core::assignment::{Assignment, AssignmentKind, AssignmentStatus};
use recovery_engine::core::bond::Bond;
use recovery_engine::core::enforcement::{Enforcement, EnforcementStatus};
use recovery_engine::interest::accrual::accrued_interest;
use rust_decimal::Decimal;

/// Generate a principal in won (0 to 1 billion).
fn arb_principal() -> impl Strategy<Value = Decimal> {
    (0u64..1_000_000_000u64).prop_map(Decimal::from)
}

/// Generate an annual rate (0% to 30%).
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0u64..30u64).prop_map(Decimal::from)
}

/// Generate a date within a few years of 2024.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..2000i64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Generate an enforcement with a random status, amount and timestamp.
fn arb_enforcement() -> impl Strategy<Value = Enforcement> {
    (any::<bool>(), 0u64..100_000_000u64, 0i64..1000i64).prop_map(|(closed, amount, offset)| {
        let status = if closed {
            EnforcementStatus::Closed
        } else {
            EnforcementStatus::Ongoing
        };
        let created_at = Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap()
            + Duration::days(offset);
        Enforcement::new(status, Decimal::from(amount), "추심", created_at)
    })
}

/// Generate an assignment with 0..=1 bonds and 0..5 enforcements.
fn arb_assignment() -> impl Strategy<Value = Assignment> {
    (
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(arb_principal()),
        prop::collection::vec(arb_enforcement(), 0..5),
    )
        .prop_map(|(closed, litigation, principal, enforcements)| {
            let status = if closed {
                AssignmentStatus::Closed
            } else {
                AssignmentStatus::Ongoing
            };
            let kind = if litigation {
                AssignmentKind::Litigation
            } else {
                AssignmentKind::Collection
            };
            let mut assignment = Assignment::new(status, kind);
            if let Some(p) = principal {
                assignment = assignment.with_bond(Bond::new(p));
            }
            for e in enforcements {
                assignment = assignment.with_enforcement(e);
            }
            assignment
        })
}

fn arb_portfolio() -> impl Strategy<Value = Vec<Assignment>> {
    prop::collection::vec(arb_assignment(), 0..30)
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Accrued interest is never negative for valid input.
    // ===================================================================
    #[test]
    fn interest_never_negative(
        principal in arb_principal(),
        rate in arb_rate(),
        start in arb_date(),
        days in 0i64..3000i64,
    ) {
        let end = start + Duration::days(days);
        let interest = accrued_interest(principal, rate, start, end).unwrap();
        prop_assert!(interest >= Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 2: A zero-length period accrues exactly zero, whatever
    // the principal and rate.
    // ===================================================================
    #[test]
    fn zero_span_accrues_zero(
        principal in arb_principal(),
        rate in arb_rate(),
        day in arb_date(),
    ) {
        let interest = accrued_interest(principal, rate, day, day).unwrap();
        prop_assert_eq!(interest, Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 3: Interest grows monotonically with the day span.
    // ===================================================================
    #[test]
    fn interest_monotone_in_span(
        principal in arb_principal(),
        rate in arb_rate(),
        start in arb_date(),
        days_a in 0i64..1500i64,
        extra in 0i64..1500i64,
    ) {
        let shorter = accrued_interest(principal, rate, start, start + Duration::days(days_a)).unwrap();
        let longer = accrued_interest(
            principal,
            rate,
            start,
            start + Duration::days(days_a + extra),
        ).unwrap();
        prop_assert!(longer >= shorter);
    }

    // ===================================================================
    // INVARIANT 4: An inverted period is always a typed error.
    // ===================================================================
    #[test]
    fn inverted_span_always_errors(
        principal in arb_principal(),
        rate in arb_rate(),
        start in arb_date(),
        days in 1i64..3000i64,
    ) {
        let end = start - Duration::days(days);
        prop_assert!(accrued_interest(principal, rate, start, end).is_err());
    }

    // ===================================================================
    // INVARIANT 5: Summary totals equal manual sums over the snapshot.
    // ===================================================================
    #[test]
    fn summary_matches_manual_sums(portfolio in arb_portfolio()) {
        let summary = PortfolioSummary::from_assignments(&portfolio);

        let manual_principal: Decimal = portfolio.iter().map(|a| a.principal()).sum();
        let manual_collected: Decimal = portfolio
            .iter()
            .flat_map(|a| a.enforcements())
            .filter(|e| e.is_recovered())
            .map(|e| e.amount())
            .sum();
        let manual_completed = portfolio.iter().filter(|a| a.is_closed()).count();

        prop_assert_eq!(summary.total_count(), portfolio.len());
        prop_assert_eq!(summary.completed_count(), manual_completed);
        prop_assert_eq!(summary.total_principal(), manual_principal);
        prop_assert_eq!(summary.total_collected(), manual_collected);
    }

    // ===================================================================
    // INVARIANT 6: Recovery rate is non-negative and zero exactly when
    // principal is zero (never a divide-by-zero).
    // ===================================================================
    #[test]
    fn recovery_rate_well_defined(portfolio in arb_portfolio()) {
        let summary = PortfolioSummary::from_assignments(&portfolio);
        let rate = summary.average_recovery_rate();
        prop_assert!(rate >= Decimal::ZERO);
        if summary.total_principal() == Decimal::ZERO {
            prop_assert_eq!(rate, Decimal::ZERO);
        }
    }

    // ===================================================================
    // INVARIANT 7: Bucketing always yields exactly N buckets in strictly
    // increasing calendar order, ending at the as-of month.
    // ===================================================================
    #[test]
    fn trend_window_shape(
        enforcements in prop::collection::vec(arb_enforcement(), 0..50),
        as_of in arb_date(),
        months in 1usize..24usize,
    ) {
        use chrono::Datelike;
        let buckets = monthly_recovery(&enforcements, as_of, months);
        prop_assert_eq!(buckets.len(), months);

        let last = buckets.last().unwrap();
        prop_assert_eq!((last.year, last.month), (as_of.year(), as_of.month()));

        for pair in buckets.windows(2) {
            let a = pair[0].year * 12 + pair[0].month as i32;
            let b = pair[1].year * 12 + pair[1].month as i32;
            prop_assert_eq!(b - a, 1);
        }
    }

    // ===================================================================
    // INVARIANT 8: Bucketed totals never exceed the total of closed
    // enforcements, and ongoing ones never contribute.
    // ===================================================================
    #[test]
    fn trend_counts_only_closed(
        enforcements in prop::collection::vec(arb_enforcement(), 0..50),
        months in 1usize..24usize,
    ) {
        let as_of = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let buckets = monthly_recovery(&enforcements, as_of, months);

        let bucketed: Decimal = buckets.iter().map(|b| b.amount).sum();
        let closed_total: Decimal = enforcements
            .iter()
            .filter(|e| e.is_recovered())
            .map(|e| e.amount())
            .sum();
        prop_assert!(bucketed <= closed_total);
    }
}
