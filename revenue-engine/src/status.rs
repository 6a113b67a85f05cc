//! Status snapshot calculator - one current revenue number per order
//!
//! Used by dashboards and totals that need "how much is this order worth
//! right now" without a date window.

use rust_decimal::Decimal;
use shared::order::{OrderSnapshot, OrderStatus, OrderType};

use crate::business_day::BusinessDayPolicy;
use crate::deriver::{pickup_amount, same_day_flags};
use crate::money::{round_money, to_decimal};

/// Current revenue represented by `order`, independent of any date window.
pub fn current_revenue(order: &OrderSnapshot, policy: BusinessDayPolicy) -> Decimal {
    if order.order_type == OrderType::Sale {
        return if order.is_cancelled() {
            Decimal::ZERO
        } else {
            round_money(to_decimal(order.total_amount))
        };
    }

    let amount = match order.status {
        OrderStatus::Cancelled => Decimal::ZERO,
        OrderStatus::Reserved => {
            let flags = same_day_flags(order, policy);
            // Same-day timestamps already imply a collapsed event; the
            // richer number appears once the order advances.
            if flags.pickup || flags.ret {
                Decimal::ZERO
            } else {
                to_decimal(order.deposit_amount)
            }
        }
        OrderStatus::Pickuped => {
            let flags = same_day_flags(order, policy);
            pickup_amount(order, flags.pickup)
        }
        // Terminal: the canonical total, independent of day timing.
        OrderStatus::Returned | OrderStatus::Completed => {
            to_decimal(order.total_amount) + to_decimal(order.damage_fee)
        }
    };
    round_money(amount)
}
