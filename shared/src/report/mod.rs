//! Day-bucketed revenue report DTOs
//!
//! These are the literal shapes the reporting API serializes; field names
//! follow the frontend's camelCase contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::{OrderStatus, OrderType, RevenueEvent, RevenueLabel};

/// One order's merged row within a single business day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub order_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub order_type: OrderType,
    pub status: OrderStatus,
    /// Sum of the row's event revenues
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    /// Collapses to `MULTIPLE` once the row holds more than one event
    pub revenue_type: RevenueLabel,
    /// Unique event descriptions joined with `" + "`, insertion order
    pub description: String,
    /// First event's timestamp (Unix millis) - stays put as events merge in
    pub revenue_date: i64,
    /// Underlying events, kept for audit callers; not part of the JSON
    #[serde(skip)]
    pub events: Vec<RevenueEvent>,
}

/// One business day's bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    /// Business date (YYYY-MM-DD)
    pub date: String,
    /// Start of the business day, RFC 3339
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    /// Orders created that day (creation-instant cancellations excluded)
    pub new_order_count: i64,
    pub orders: Vec<OrderRow>,
}

/// Report footer totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_days: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub total_new_orders: i64,
    /// Distinct orders contributing at least one row in the window
    pub total_orders: i64,
}

/// Full day-by-day revenue report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueReport {
    pub days: Vec<DayReport>,
    pub summary: ReportSummary,
}

/// Realized vs. projected income over a window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    /// Revenue from events that already happened
    #[serde(with = "rust_decimal::serde::float")]
    pub real_income: Decimal,
    /// Revenue expected from planned pickup/return dates
    #[serde(with = "rust_decimal::serde::float")]
    pub future_income: Decimal,
}
