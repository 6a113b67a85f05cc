//! Revenue events - dated, signed monetary entries per lifecycle transition

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which lifecycle transition produced a revenue event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevenueKind {
    Sale,
    RentDeposit,
    RentPickup,
    RentReturn,
    RentCancelled,
    SaleCancelled,
    RentFuturePickup,
    RentFutureReturn,
}

/// One dated, signed monetary entry attributable to a lifecycle transition
///
/// `revenue` is negative for refunds. The full unfiltered event list of a
/// rental that completes normally always sums to `total_amount + damage_fee`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueEvent {
    /// Signed amount
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    /// Event timestamp (Unix millis)
    pub date: i64,
    /// Human-readable description shown on report rows
    pub description: String,
    pub revenue_type: RevenueKind,
}

impl RevenueEvent {
    pub fn new(
        revenue: Decimal,
        date: i64,
        description: impl Into<String>,
        revenue_type: RevenueKind,
    ) -> Self {
        Self {
            revenue,
            date,
            description: description.into(),
            revenue_type,
        }
    }
}

/// Revenue label shown on a merged report row
///
/// Mirrors [`RevenueKind`], plus `Multiple` once a row aggregates more than
/// one event of the same order on the same day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevenueLabel {
    Sale,
    RentDeposit,
    RentPickup,
    RentReturn,
    RentCancelled,
    SaleCancelled,
    RentFuturePickup,
    RentFutureReturn,
    Multiple,
}

impl From<RevenueKind> for RevenueLabel {
    fn from(kind: RevenueKind) -> Self {
        match kind {
            RevenueKind::Sale => RevenueLabel::Sale,
            RevenueKind::RentDeposit => RevenueLabel::RentDeposit,
            RevenueKind::RentPickup => RevenueLabel::RentPickup,
            RevenueKind::RentReturn => RevenueLabel::RentReturn,
            RevenueKind::RentCancelled => RevenueLabel::RentCancelled,
            RevenueKind::SaleCancelled => RevenueLabel::SaleCancelled,
            RevenueKind::RentFuturePickup => RevenueLabel::RentFuturePickup,
            RevenueKind::RentFutureReturn => RevenueLabel::RentFutureReturn,
        }
    }
}
