//! Stateless engine surface consumed by the API layer

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::order::{OrderSnapshot, RevenueEvent};
use shared::report::{IncomeSummary, RevenueReport};

use crate::business_day::{BusinessDayPolicy, TimeRange};

/// Revenue recognition engine
///
/// The single source of truth for every revenue number in the system:
/// snapshot totals, single-day drill-downs and period reports all route
/// through the same derivation rules. Carries only the day policy, so it is
/// `Copy` and trivially shared across request handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevenueEngine {
    policy: BusinessDayPolicy,
}

impl RevenueEngine {
    pub fn new(policy: BusinessDayPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> BusinessDayPolicy {
        self.policy
    }

    /// Every already-occurred revenue event for one order, optionally
    /// filtered to a window. Raw material for audit trails.
    pub fn derive_events(
        &self,
        order: &OrderSnapshot,
        window: Option<TimeRange>,
    ) -> Vec<RevenueEvent> {
        crate::deriver::derive_events(order, window, self.policy)
    }

    /// Revenue expected from planned pickup/return dates inside the window
    /// and strictly after `now`.
    pub fn project_future(
        &self,
        order: &OrderSnapshot,
        window: TimeRange,
        now: i64,
    ) -> Vec<RevenueEvent> {
        crate::projector::project_future(order, window, now)
    }

    /// The single "current" revenue number for one order (dashboards).
    pub fn current_revenue(&self, order: &OrderSnapshot) -> Decimal {
        crate::status::current_revenue(order, self.policy)
    }

    /// One order's contribution on exactly one business day (drill-downs).
    pub fn revenue_for_date(&self, order: &OrderSnapshot, date: NaiveDate, now: i64) -> Decimal {
        crate::resolver::revenue_for_date(order, date, now, self.policy)
    }

    /// Realized vs. projected income over a window.
    pub fn period_income(
        &self,
        orders: &[OrderSnapshot],
        window: TimeRange,
        now: i64,
    ) -> IncomeSummary {
        crate::report::period_income(orders, window, now, self.policy)
    }

    /// Day-by-day revenue report over a window.
    pub fn daily_report(&self, orders: &[OrderSnapshot], window: TimeRange) -> RevenueReport {
        crate::report::daily_report(orders, window, self.policy)
    }
}
