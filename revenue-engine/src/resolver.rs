//! Per-date resolver - one order's contribution on exactly one business day
//!
//! Single-day drill-downs combine realized and projected logic: closed
//! orders keep reporting their terminal total "as of" any later date, while
//! future dates only ever see planned projections.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::order::{OrderSnapshot, OrderStatus};

use crate::business_day::{BusinessDayPolicy, TimeRange};
use crate::deriver::{derive_events, return_amount, same_day_flags};
use crate::money::{round_money, to_decimal};
use crate::projector::project_future;

/// Revenue `order` contributes on exactly `target_day`.
///
/// `now` decides whether the target is history (realized events) or the
/// future (projections).
pub fn revenue_for_date(
    order: &OrderSnapshot,
    target_day: NaiveDate,
    now: i64,
    policy: BusinessDayPolicy,
) -> Decimal {
    if let Some(returned_day) = order.returned_at.and_then(|r| policy.day_key(r)) {
        // "As of" reporting: a closed order still reports its final total on
        // any date after closing.
        if returned_day < target_day
            && matches!(order.status, OrderStatus::Returned | OrderStatus::Completed)
        {
            return round_money(to_decimal(order.total_amount) + to_decimal(order.damage_fee));
        }
        if returned_day == target_day {
            let flags = same_day_flags(order, policy);
            return round_money(return_amount(order, flags.ret));
        }
    }

    let is_future = policy
        .day_key(now)
        .map(|today| target_day > today)
        .unwrap_or(false);
    if is_future {
        let window = TimeRange::single_business_day(target_day, policy);
        return project_future(order, window, now)
            .iter()
            .filter(|ev| policy.day_key(ev.date) == Some(target_day))
            .map(|ev| ev.revenue)
            .sum();
    }

    derive_events(order, None, policy)
        .iter()
        .filter(|ev| policy.day_key(ev.date) == Some(target_day))
        .map(|ev| ev.revenue)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::order::OrderType;

    fn day(d: u32, hour: u32) -> i64 {
        Utc.with_ymd_and_hms(2024, 3, d, hour, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn rent_order() -> OrderSnapshot {
        let mut order = OrderSnapshot::new("o-1", "R-0001", OrderType::Rent, day(1, 9));
        order.total_amount = 500.0;
        order.deposit_amount = 100.0;
        order.security_deposit = 50.0;
        order.damage_fee = 20.0;
        order
    }

    fn returned_order() -> OrderSnapshot {
        let mut order = rent_order();
        order.status = OrderStatus::Returned;
        order.picked_up_at = Some(day(2, 10));
        order.returned_at = Some(day(3, 11));
        order.updated_at = day(3, 11);
        order
    }

    #[test]
    fn test_closed_order_reports_terminal_total_after_closing() {
        let order = returned_order();
        let revenue =
            revenue_for_date(&order, date(10), day(15, 12), BusinessDayPolicy::utc());
        assert_eq!(revenue, Decimal::from(520));
    }

    #[test]
    fn test_return_day_uses_the_return_formula() {
        let order = returned_order();
        // Cross-day return: damage - security
        let revenue = revenue_for_date(&order, date(3), day(15, 12), BusinessDayPolicy::utc());
        assert_eq!(revenue, Decimal::from(-30));

        // Same-day pickup and return: the collapsed single event
        let mut collapsed = rent_order();
        collapsed.status = OrderStatus::Returned;
        collapsed.picked_up_at = Some(day(3, 9));
        collapsed.returned_at = Some(day(3, 17));
        let revenue =
            revenue_for_date(&collapsed, date(3), day(15, 12), BusinessDayPolicy::utc());
        assert_eq!(revenue, Decimal::from(520));
    }

    #[test]
    fn test_past_day_sums_realized_events() {
        let order = returned_order();
        let policy = BusinessDayPolicy::utc();
        assert_eq!(
            revenue_for_date(&order, date(1), day(15, 12), policy),
            Decimal::from(100)
        );
        assert_eq!(
            revenue_for_date(&order, date(2), day(15, 12), policy),
            Decimal::from(450)
        );
        // A day the order never touched
        assert_eq!(
            revenue_for_date(&order, date(2), day(15, 12), policy)
                + revenue_for_date(&order, date(1), day(15, 12), policy)
                + revenue_for_date(&order, date(3), day(15, 12), policy),
            Decimal::from(520)
        );
    }

    #[test]
    fn test_future_day_sums_matching_projections() {
        let mut order = rent_order();
        order.pickup_plan_at = Some(day(6, 10));

        let policy = BusinessDayPolicy::utc();
        // Five days ahead of "now": the projected pickup remainder
        assert_eq!(
            revenue_for_date(&order, date(6), day(1, 12), policy),
            Decimal::from(400) // 500 - 100
        );
        // A future day with no plan on it
        assert_eq!(
            revenue_for_date(&order, date(7), day(1, 12), policy),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_day_after_return_still_reports_terminal_total() {
        let order = returned_order();
        // No realized event lands on day 4, but the as-of rule keeps the
        // closed order's final total visible.
        let revenue =
            revenue_for_date(&order, date(4), day(4, 12), BusinessDayPolicy::utc());
        assert_eq!(revenue, Decimal::from(520));
    }
}
