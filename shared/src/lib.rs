//! Shared types for the rental order-management platform
//!
//! Plain serde data records exchanged between the store layer, the revenue
//! engine and the reporting API. No business logic lives here.

pub mod order;
pub mod report;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use order::{OrderSnapshot, OrderStatus, OrderType, RevenueEvent, RevenueKind, RevenueLabel};
pub use report::{DayReport, IncomeSummary, OrderRow, ReportSummary, RevenueReport};
