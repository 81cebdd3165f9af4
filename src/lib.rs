//! # recovery-engine
//!
//! Bond interest accrual and debt-recovery analytics for collection
//! portfolios.
//!
//! Given snapshots of assignments (cases) with their attached bonds and
//! enforcement records, this engine computes simple interest over
//! date-bounded rate terms, portfolio-level recovery statistics, and
//! monthly recovery trends. All computation is pure and synchronous over
//! in-memory data; persistence belongs to the surrounding system.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: assignments, bonds, enforcements, money
//! - **interest** — Simple-interest accrual and per-bond breakdowns
//! - **analytics** — Portfolio aggregation and monthly trend bucketing
//! - **simulation** — Random portfolio generation for testing

pub mod analytics;
pub mod core;
pub mod interest;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::analytics::portfolio::PortfolioSummary;
    pub use crate::analytics::trend::{monthly_recovery, MonthlyBucket};
    pub use crate::core::assignment::{Assignment, AssignmentKind, AssignmentStatus};
    pub use crate::core::bond::{Bond, Expense, InterestPeriod};
    pub use crate::core::enforcement::{Enforcement, EnforcementStatus};
    pub use crate::interest::accrual::{accrued_interest, period_interest, InterestError};
    pub use crate::interest::breakdown::BondBreakdown;
}
