use crate::core::bond::Bond;
use crate::core::enforcement::Enforcement;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle status of an assignment (case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Ongoing,
    Closed,
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentStatus::Ongoing => write!(f, "ongoing"),
            AssignmentStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Engagement type: debt collection (채권) or litigation (소송).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentKind {
    Collection,
    Litigation,
}

impl fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentKind::Collection => write!(f, "collection"),
            AssignmentKind::Litigation => write!(f, "litigation"),
        }
    }
}

/// A client engagement (case) with its attached bond and enforcement history.
///
/// This is the unit the portfolio aggregator consumes. The backend may
/// omit the nested collections entirely for partially-loaded records, so
/// both default to empty on deserialization rather than failing.
///
/// # Examples
///
/// ```
/// use recovery_engine::core::assignment::{Assignment, AssignmentKind, AssignmentStatus};
/// use recovery_engine::core::bond::Bond;
/// use rust_decimal_macros::dec;
///
/// let a = Assignment::new(AssignmentStatus::Ongoing, AssignmentKind::Collection)
///     .with_bond(Bond::new(dec!(10_000_000)));
/// assert_eq!(a.principal(), dec!(10_000_000));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier for this assignment.
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    status: AssignmentStatus,
    kind: AssignmentKind,
    /// Bonds attached to the case. In practice zero or one.
    #[serde(default)]
    bonds: Vec<Bond>,
    /// Enforcement actions taken for the case.
    #[serde(default)]
    enforcements: Vec<Enforcement>,
}

impl Assignment {
    /// Create a new assignment with no bond and no enforcement history.
    pub fn new(status: AssignmentStatus, kind: AssignmentKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            status,
            kind,
            bonds: Vec::new(),
            enforcements: Vec::new(),
        }
    }

    /// Create an assignment with a specific ID (useful for testing / determinism).
    pub fn with_id(id: Uuid, status: AssignmentStatus, kind: AssignmentKind) -> Self {
        Self {
            id,
            status,
            kind,
            bonds: Vec::new(),
            enforcements: Vec::new(),
        }
    }

    /// Attach a bond.
    pub fn with_bond(mut self, bond: Bond) -> Self {
        self.bonds.push(bond);
        self
    }

    /// Append an enforcement record.
    pub fn with_enforcement(mut self, enforcement: Enforcement) -> Self {
        self.enforcements.push(enforcement);
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> AssignmentStatus {
        self.status
    }

    pub fn kind(&self) -> AssignmentKind {
        self.kind
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn enforcements(&self) -> &[Enforcement] {
        &self.enforcements
    }

    pub fn is_closed(&self) -> bool {
        self.status == AssignmentStatus::Closed
    }

    /// The case's first bond, if any. Portfolio totals count only this one.
    pub fn primary_bond(&self) -> Option<&Bond> {
        self.bonds.first()
    }

    /// Principal of the first bond, or zero when the case has no bond.
    pub fn principal(&self) -> Decimal {
        self.primary_bond()
            .map(|b| b.principal())
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of closed enforcement amounts — funds actually recovered.
    pub fn recovered(&self) -> Decimal {
        self.enforcements
            .iter()
            .filter(|e| e.is_recovered())
            .map(|e| e.amount())
            .sum()
    }
}
