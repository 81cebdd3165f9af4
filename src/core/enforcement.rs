use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle status of an enforcement action.
///
/// Only `Closed` enforcements represent funds actually recovered;
/// `Ongoing` actions are pending and never counted toward collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementStatus {
    Ongoing,
    Closed,
}

impl fmt::Display for EnforcementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnforcementStatus::Ongoing => write!(f, "ongoing"),
            EnforcementStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A recovery action taken against a debtor and the amount it realized.
///
/// Enforcements are immutable snapshots read from the case-management
/// backend. The engine only aggregates them; it never mutates or persists.
///
/// # Examples
///
/// ```
/// use recovery_engine::core::enforcement::{Enforcement, EnforcementStatus};
/// use chrono::Utc;
/// use rust_decimal_macros::dec;
///
/// let e = Enforcement::new(
///     EnforcementStatus::Closed,
///     dec!(3_000_000),
///     "압류",
///     Utc::now(),
/// );
/// assert!(e.is_recovered());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enforcement {
    /// Unique identifier for this enforcement.
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    /// Lifecycle status; only `closed` counts as recovered.
    status: EnforcementStatus,
    /// Amount realized (or expected, while ongoing). Must be non-negative.
    amount: Decimal,
    /// Free-form enforcement type (e.g. 압류, 추심, 경매).
    #[serde(default)]
    kind: String,
    /// When the enforcement record was created.
    created_at: DateTime<Utc>,
}

impl Enforcement {
    /// Create a new enforcement record.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is negative.
    pub fn new(
        status: EnforcementStatus,
        amount: Decimal,
        kind: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        assert!(
            amount >= Decimal::ZERO,
            "Enforcement amount must be non-negative, got {}",
            amount
        );
        Self {
            id: Uuid::new_v4(),
            status,
            amount,
            kind: kind.into(),
            created_at,
        }
    }

    /// Create an enforcement with a specific ID (useful for testing / determinism).
    pub fn with_id(
        id: Uuid,
        status: EnforcementStatus,
        amount: Decimal,
        kind: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        assert!(amount >= Decimal::ZERO);
        Self {
            id,
            status,
            amount,
            kind: kind.into(),
            created_at,
        }
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> EnforcementStatus {
        self.status
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether this enforcement counts as actually recovered funds.
    pub fn is_recovered(&self) -> bool {
        self.status == EnforcementStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_closed_counts_as_recovered() {
        let e = Enforcement::new(EnforcementStatus::Closed, dec!(500), "추심", ts(2024, 3, 1));
        assert!(e.is_recovered());
        assert_eq!(e.amount(), dec!(500));
    }

    #[test]
    fn test_ongoing_not_recovered() {
        let e = Enforcement::new(EnforcementStatus::Ongoing, dec!(500), "압류", ts(2024, 3, 1));
        assert!(!e.is_recovered());
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_negative_amount_rejected() {
        Enforcement::new(EnforcementStatus::Closed, dec!(-1), "추심", ts(2024, 3, 1));
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&EnforcementStatus::Closed).unwrap();
        assert_eq!(json, "\"closed\"");
        let back: EnforcementStatus = serde_json::from_str("\"ongoing\"").unwrap();
        assert_eq!(back, EnforcementStatus::Ongoing);
    }
}
