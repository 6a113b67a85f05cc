//! Event deriver - already-occurred revenue events for one order
//!
//! Which sub-amounts get counted depends on which state transition produced
//! which timestamp, not just the current status. Same-day transitions
//! collapse into a single event so a deposit already folded into a later
//! payment is never double counted, and cancellation synthesizes an exact
//! refund of whatever had been collected along the path taken.

use rust_decimal::Decimal;
use shared::order::{OrderSnapshot, OrderType, RevenueEvent, RevenueKind};

use crate::business_day::{BusinessDayPolicy, TimeRange};
use crate::money::{round_money, to_decimal};

pub(crate) const DESC_SALE: &str = "Sale payment";
pub(crate) const DESC_SALE_CANCELLED: &str = "Sale refund";
pub(crate) const DESC_DEPOSIT: &str = "Reservation deposit";
pub(crate) const DESC_PICKUP: &str = "Pickup payment";
pub(crate) const DESC_RETURN: &str = "Return settlement";
pub(crate) const DESC_CANCELLED: &str = "Cancellation refund";

/// Same-day collapse flags for a rental
///
/// A flag is false while the transition it depends on has not happened
/// (or its timestamp is unrepresentable).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SameDayFlags {
    /// Pickup on the creation day
    pub pickup: bool,
    /// Return on the pickup day (or creation day when never picked up)
    pub ret: bool,
}

pub(crate) fn same_day_flags(order: &OrderSnapshot, policy: BusinessDayPolicy) -> SameDayFlags {
    let pickup = order
        .picked_up_at
        .map(|picked| policy.same_day(order.created_at, picked))
        .unwrap_or(false);
    let ret = order
        .returned_at
        .map(|returned| policy.same_day(order.picked_up_at.unwrap_or(order.created_at), returned))
        .unwrap_or(false);
    SameDayFlags { pickup, ret }
}

/// Amount collected at pickup.
///
/// Same-day pickup means no separate deposit event exists, so the deposit is
/// implicitly included rather than subtracted.
pub(crate) fn pickup_amount(order: &OrderSnapshot, same_day_pickup: bool) -> Decimal {
    let total = to_decimal(order.total_amount);
    let security = to_decimal(order.security_deposit);
    if same_day_pickup {
        total + security
    } else {
        total - to_decimal(order.deposit_amount) + security
    }
}

/// Amount settled at return.
///
/// A same-day return absorbs the whole lifecycle into one event; otherwise
/// the sign shows security-deposit refund vs. extra damage charge.
pub(crate) fn return_amount(order: &OrderSnapshot, same_day_return: bool) -> Decimal {
    if same_day_return {
        to_decimal(order.total_amount) + to_decimal(order.damage_fee)
    } else {
        to_decimal(order.damage_fee) - to_decimal(order.security_deposit)
    }
}

/// Everything the deposit/pickup/return arithmetic had recognized by the
/// time the order was cancelled. Both day-splits of the pickup arithmetic
/// telescope to the same sum, so no flag is needed once pickup happened.
pub(crate) fn collected_before_cancellation(order: &OrderSnapshot) -> Decimal {
    if order.cancelled_at_creation() {
        return Decimal::ZERO;
    }
    if order.returned_at.is_some() {
        return to_decimal(order.total_amount) + to_decimal(order.damage_fee);
    }
    if order.picked_up_at.is_some() {
        return to_decimal(order.total_amount) + to_decimal(order.security_deposit);
    }
    to_decimal(order.deposit_amount)
}

/// Derive every already-occurred revenue event for `order`.
///
/// Events outside `window` are dropped from the returned list but still
/// conceptually happened - filtering never changes any amount.
pub fn derive_events(
    order: &OrderSnapshot,
    window: Option<TimeRange>,
    policy: BusinessDayPolicy,
) -> Vec<RevenueEvent> {
    let mut events = match order.order_type {
        OrderType::Sale => sale_events(order),
        OrderType::Rent => rent_events(order, policy),
    };
    if let Some(window) = window {
        events.retain(|ev| window.contains(ev.date));
    }
    events
}

fn sale_events(order: &OrderSnapshot) -> Vec<RevenueEvent> {
    // Cancelled at the creation instant: the sale never really happened.
    if order.cancelled_at_creation() {
        return Vec::new();
    }

    let total = round_money(to_decimal(order.total_amount));
    let mut events = vec![RevenueEvent::new(
        total,
        order.created_at,
        DESC_SALE,
        RevenueKind::Sale,
    )];

    if order.is_cancelled() && order.created_at < order.updated_at {
        events.push(RevenueEvent::new(
            -total,
            order.updated_at,
            DESC_SALE_CANCELLED,
            RevenueKind::SaleCancelled,
        ));
    }

    events
}

fn rent_events(order: &OrderSnapshot, policy: BusinessDayPolicy) -> Vec<RevenueEvent> {
    let flags = same_day_flags(order, policy);
    let mut events = Vec::new();

    // Deposit is only counted separately when pickup and return each get
    // their own later event.
    if !flags.ret && !flags.pickup && !order.cancelled_at_creation() {
        events.push(RevenueEvent::new(
            round_money(to_decimal(order.deposit_amount)),
            order.created_at,
            DESC_DEPOSIT,
            RevenueKind::RentDeposit,
        ));
    }

    if let Some(picked_up_at) = order.picked_up_at {
        let absorbed_by_return = flags.ret;
        let absorbed_by_cancel = order
            .cancelled_at()
            .map(|cancelled| policy.same_day(cancelled, picked_up_at))
            .unwrap_or(false);
        if !absorbed_by_return && !absorbed_by_cancel {
            events.push(RevenueEvent::new(
                round_money(pickup_amount(order, flags.pickup)),
                picked_up_at,
                DESC_PICKUP,
                RevenueKind::RentPickup,
            ));
        }
    }

    if let Some(returned_at) = order.returned_at {
        events.push(RevenueEvent::new(
            round_money(return_amount(order, flags.ret)),
            returned_at,
            DESC_RETURN,
            RevenueKind::RentReturn,
        ));
    }

    if let Some(cancelled_at) = order.cancelled_at() {
        let collected = round_money(collected_before_cancellation(order));
        if !collected.is_zero() {
            events.push(RevenueEvent::new(
                -collected,
                cancelled_at,
                DESC_CANCELLED,
                RevenueKind::RentCancelled,
            ));
        }
    }

    events
}
