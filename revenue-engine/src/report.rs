//! Period aggregation and day-bucketed reporting
//!
//! Buckets derived events by business day and merges same-order/same-day
//! events into single report rows. Rows live in an arena `Vec` per day with
//! an order-id index handing out stable handles, so accumulation is
//! insertion-order deterministic and never depends on hash iteration order.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::order::{OrderSnapshot, RevenueEvent, RevenueLabel};
use shared::report::{DayReport, IncomeSummary, OrderRow, ReportSummary, RevenueReport};

use crate::business_day::{BusinessDayPolicy, TimeRange};
use crate::deriver::derive_events;
use crate::projector::project_future;

/// Realized vs. projected income over `window`.
pub fn period_income(
    orders: &[OrderSnapshot],
    window: TimeRange,
    now: i64,
    policy: BusinessDayPolicy,
) -> IncomeSummary {
    let mut real_income = Decimal::ZERO;
    let mut future_income = Decimal::ZERO;

    for order in orders {
        for event in derive_events(order, Some(window), policy) {
            // A realized event dated past "now" would double count against
            // the projections; guarded out.
            if event.date <= now {
                real_income += event.revenue;
            }
        }
        for event in project_future(order, window, now) {
            future_income += event.revenue;
        }
    }

    IncomeSummary {
        real_income,
        future_income,
    }
}

/// Per-day accumulator: an arena of rows plus an order-id index into it.
#[derive(Default)]
struct DayBucket {
    total_revenue: Decimal,
    new_order_count: i64,
    rows: Vec<OrderRow>,
    row_index: HashMap<String, usize>,
}

impl DayBucket {
    /// Merge one event into the bucket. The first event of an order creates
    /// its row; later ones update the row in place through the index.
    fn push_event(&mut self, order: &OrderSnapshot, event: RevenueEvent) {
        self.total_revenue += event.revenue;
        match self.row_index.get(&order.id) {
            Some(&idx) => {
                let row = &mut self.rows[idx];
                row.revenue += event.revenue;
                row.events.push(event);
                // More than one event now: the label collapses and the
                // description becomes the joined unique set. The displayed
                // timestamp stays the first event's.
                row.revenue_type = RevenueLabel::Multiple;
                row.description = merged_description(&row.events);
            }
            None => {
                self.row_index.insert(order.id.clone(), self.rows.len());
                self.rows.push(OrderRow {
                    id: order.id.clone(),
                    order_number: order.order_number.clone(),
                    customer_name: order.customer_name.clone(),
                    order_type: order.order_type,
                    status: order.status,
                    revenue: event.revenue,
                    revenue_type: event.revenue_type.into(),
                    description: event.description.clone(),
                    revenue_date: event.date,
                    events: vec![event],
                });
            }
        }
    }
}

/// Unique event descriptions joined with `" + "`, insertion order preserved.
fn merged_description(events: &[RevenueEvent]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(events.len());
    for event in events {
        if !seen.contains(&event.description.as_str()) {
            seen.push(&event.description);
        }
    }
    seen.join(" + ")
}

/// Day-by-day revenue report over `window`.
pub fn daily_report(
    orders: &[OrderSnapshot],
    window: TimeRange,
    policy: BusinessDayPolicy,
) -> RevenueReport {
    // BTreeMap keys the buckets by business date, so the output is
    // date-ordered no matter how input orders interleave.
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for order in orders {
        for event in derive_events(order, Some(window), policy) {
            let Some(day) = policy.day_key(event.date) else {
                continue;
            };
            buckets.entry(day).or_default().push_event(order, event);
        }

        // New-order counting is independent of whether any event survived
        // the same-day collapse on the creation day.
        if window.contains(order.created_at) && !order.cancelled_at_creation() {
            if let Some(day) = policy.day_key(order.created_at) {
                buckets.entry(day).or_default().new_order_count += 1;
            }
        }
    }

    let mut total_revenue = Decimal::ZERO;
    let mut total_new_orders = 0;
    let mut distinct_orders: HashSet<String> = HashSet::new();
    let mut days = Vec::with_capacity(buckets.len());

    for (date, bucket) in buckets {
        total_revenue += bucket.total_revenue;
        total_new_orders += bucket.new_order_count;
        for row in &bucket.rows {
            distinct_orders.insert(row.id.clone());
        }
        days.push(DayReport {
            date: date.format("%Y-%m-%d").to_string(),
            date_iso: policy.day_start(date).to_rfc3339(),
            total_revenue: bucket.total_revenue,
            new_order_count: bucket.new_order_count,
            orders: bucket.rows,
        });
    }

    let summary = ReportSummary {
        total_days: days.len() as i64,
        total_revenue,
        total_new_orders,
        total_orders: distinct_orders.len() as i64,
    };

    RevenueReport { days, summary }
}
