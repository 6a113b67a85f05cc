//! Order snapshot - the store layer's view of one order
//!
//! A plain record loaded by the (external) store layer and handed to the
//! revenue engine. Timestamps are Unix milliseconds; monetary fields are
//! floats at this boundary and converted to `Decimal` inside the engine.

use serde::{Deserialize, Serialize};

/// Order kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    #[default]
    Rent,
    Sale,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created, deposit taken, not yet picked up
    #[default]
    Reserved,
    /// Customer has taken the rented item(s)
    Pickuped,
    /// Item(s) returned; terminal non-cancelled state
    Returned,
    /// Fully settled and archived
    Completed,
    /// Terminated early; `updated_at` marks when
    Cancelled,
}

/// Order snapshot - immutable input record for revenue derivation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSnapshot {
    /// Order ID (assigned by the store layer)
    pub id: String,
    /// Human-facing order number
    pub order_number: String,
    /// Customer display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub order_type: OrderType,
    pub status: OrderStatus,
    /// Full order amount
    #[serde(default)]
    pub total_amount: f64,
    /// Collected at reservation time
    #[serde(default)]
    pub deposit_amount: f64,
    /// Refundable hold collected at pickup, settled at return
    #[serde(default)]
    pub security_deposit: f64,
    /// Damage charge assessed at return
    #[serde(default)]
    pub damage_fee: f64,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
    /// Set once the customer picked up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picked_up_at: Option<i64>,
    /// Set once the customer returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<i64>,
    /// Planned pickup date (projection only, independent of the actual event)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_plan_at: Option<i64>,
    /// Planned return date (projection only, independent of the actual event)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_plan_at: Option<i64>,
    /// Last status change; the cancellation timestamp when status is CANCELLED
    pub updated_at: i64,
}

impl OrderSnapshot {
    /// Create a minimal snapshot; monetary fields start at zero
    pub fn new(
        id: impl Into<String>,
        order_number: impl Into<String>,
        order_type: OrderType,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            order_number: order_number.into(),
            customer_name: None,
            order_type,
            status: OrderStatus::Reserved,
            total_amount: 0.0,
            deposit_amount: 0.0,
            security_deposit: 0.0,
            damage_fee: 0.0,
            created_at,
            picked_up_at: None,
            returned_at: None,
            pickup_plan_at: None,
            return_plan_at: None,
            updated_at: created_at,
        }
    }

    /// Check if order is a rental
    pub fn is_rent(&self) -> bool {
        self.order_type == OrderType::Rent
    }

    /// Check if order was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }

    /// Cancelled at the exact creation instant - treated as "never happened"
    pub fn cancelled_at_creation(&self) -> bool {
        self.is_cancelled() && self.updated_at <= self.created_at
    }

    /// Cancellation timestamp, when cancelled
    pub fn cancelled_at(&self) -> Option<i64> {
        self.is_cancelled().then_some(self.updated_at)
    }
}
