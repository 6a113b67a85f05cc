//! Future projector - revenue expected on planned dates
//!
//! Projections never read the clock; callers pass `now` explicitly so a
//! report for "next week" is reproducible in tests.

use rust_decimal::Decimal;
use shared::order::{OrderSnapshot, OrderStatus, OrderType, RevenueEvent, RevenueKind};

use crate::business_day::TimeRange;
use crate::money::{round_money, to_decimal};

pub(crate) const DESC_FUTURE_PICKUP: &str = "Expected pickup payment";
pub(crate) const DESC_DAMAGE_CHARGE: &str = "Estimated damage charge";
pub(crate) const DESC_DEPOSIT_REFUND: &str = "Estimated deposit refund";
pub(crate) const DESC_NO_ADJUSTMENT: &str = "No adjustment expected";

/// Project not-yet-occurred revenue for `order` onto planned dates inside
/// `window` and strictly after `now`.
///
/// Only rentals short of completion have a future component; sales settle
/// at creation.
pub fn project_future(order: &OrderSnapshot, window: TimeRange, now: i64) -> Vec<RevenueEvent> {
    if order.order_type != OrderType::Rent {
        return Vec::new();
    }

    let mut events = Vec::new();
    match order.status {
        OrderStatus::Reserved => {
            if let Some(plan) = order.pickup_plan_at {
                if window.contains(plan) && plan > now {
                    let expected = round_money(
                        to_decimal(order.total_amount) - to_decimal(order.deposit_amount),
                    );
                    // The deposit is already in the books; only a positive
                    // remainder is worth projecting.
                    if expected > Decimal::ZERO {
                        events.push(RevenueEvent::new(
                            expected,
                            plan,
                            DESC_FUTURE_PICKUP,
                            RevenueKind::RentFuturePickup,
                        ));
                    }
                }
            }
        }
        OrderStatus::Pickuped => {
            if let Some(plan) = order.return_plan_at {
                if window.contains(plan) && plan > now {
                    let expected = round_money(
                        to_decimal(order.damage_fee) - to_decimal(order.security_deposit),
                    );
                    let description = if expected > Decimal::ZERO {
                        DESC_DAMAGE_CHARGE
                    } else if expected < Decimal::ZERO {
                        DESC_DEPOSIT_REFUND
                    } else {
                        DESC_NO_ADJUSTMENT
                    };
                    // Emitted even at zero, for descriptive completeness.
                    events.push(RevenueEvent::new(
                        expected,
                        plan,
                        description,
                        RevenueKind::RentFutureReturn,
                    ));
                }
            }
        }
        _ => {}
    }

    events
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

    fn window() -> TimeRange {
        TimeRange::new(day(1, 0), day(30, 23)).unwrap()
    }

    #[test]
    fn test_reserved_projects_remaining_pickup_payment() {
        let mut order = OrderSnapshot::new("o-1", "R-0001", OrderType::Rent, day(1, 9));
        order.total_amount = 300.0;
        order.deposit_amount = 60.0;
        order.pickup_plan_at = Some(day(6, 10)); // five days out

        let events = project_future(&order, window(), day(1, 12));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].revenue_type, RevenueKind::RentFuturePickup);
        assert_eq!(events[0].revenue, Decimal::from(240));
        assert_eq!(events[0].date, day(6, 10));
    }

    #[test]
    fn test_reserved_skips_non_positive_projection() {
        let mut order = OrderSnapshot::new("o-1", "R-0001", OrderType::Rent, day(1, 9));
        order.total_amount = 100.0;
        order.deposit_amount = 100.0; // fully prepaid
        order.pickup_plan_at = Some(day(6, 10));

        assert!(project_future(&order, window(), day(1, 12)).is_empty());
    }

    #[test]
    fn test_pickuped_projects_return_adjustment_even_at_zero() {
        let mut order = OrderSnapshot::new("o-1", "R-0001", OrderType::Rent, day(1, 9));
        order.status = shared::order::OrderStatus::Pickuped;
        order.picked_up_at = Some(day(2, 10));
        order.return_plan_at = Some(day(9, 10));

        // damage == security == 0: zero adjustment, still emitted
        let events = project_future(&order, window(), day(2, 12));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].revenue, Decimal::ZERO);
        assert_eq!(events[0].description, DESC_NO_ADJUSTMENT);

        order.security_deposit = 50.0;
        let events = project_future(&order, window(), day(2, 12));
        assert_eq!(events[0].revenue, Decimal::from(-50));
        assert_eq!(events[0].description, DESC_DEPOSIT_REFUND);

        order.damage_fee = 80.0;
        let events = project_future(&order, window(), day(2, 12));
        assert_eq!(events[0].revenue, Decimal::from(30));
        assert_eq!(events[0].description, DESC_DAMAGE_CHARGE);
    }

    #[test]
    fn test_planned_date_in_the_past_is_not_projected() {
        let mut order = OrderSnapshot::new("o-1", "R-0001", OrderType::Rent, day(1, 9));
        order.total_amount = 300.0;
        order.pickup_plan_at = Some(day(6, 10));

        // "now" is already past the plan
        assert!(project_future(&order, window(), day(7, 0)).is_empty());
        // plan exactly at "now" is not strictly after it
        assert!(project_future(&order, window(), day(6, 10)).is_empty());
    }

    #[test]
    fn test_planned_date_outside_window_is_not_projected() {
        let mut order = OrderSnapshot::new("o-1", "R-0001", OrderType::Rent, day(1, 9));
        order.total_amount = 300.0;
        order.pickup_plan_at = Some(day(6, 10));

        let narrow = TimeRange::new(day(1, 0), day(3, 23)).unwrap();
        assert!(project_future(&order, narrow, day(1, 12)).is_empty());
    }

    #[test]
    fn test_sale_and_terminal_statuses_have_no_future() {
        let mut sale = OrderSnapshot::new("s-1", "S-0001", OrderType::Sale, day(1, 9));
        sale.pickup_plan_at = Some(day(6, 10));
        assert!(project_future(&sale, window(), day(1, 12)).is_empty());

        let mut done = OrderSnapshot::new("o-1", "R-0001", OrderType::Rent, day(1, 9));
        done.status = shared::order::OrderStatus::Returned;
        done.return_plan_at = Some(day(9, 10));
        assert!(project_future(&done, window(), day(1, 12)).is_empty());
    }
}
